//! Utilities for nfcsim: small, reusable helpers used across the crate.
//!
//! Currently this is hex rendering and parsing, shared by the diagnostic
//! messages and by tests that build APDUs from hex strings.

pub mod hex;

// Re-export the most common helpers at the `utils` module level so callers
// can use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
