// nfcsim-rs/nfcsim/src/prelude.rs

//! Convenience re-exports of the public surface.

pub use crate::diagnostics::{CaptureSink, DiagnosticSink, LogSink};
pub use crate::expectation::{Expectation, MatchOutcome};
pub use crate::reader::{MockReader, NfcReader};
pub use crate::{Error, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, hex_byte, parse_hex};
