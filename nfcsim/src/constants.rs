// nfcsim-rs/nfcsim/src/constants.rs
//! Common ISO 7816 APDU constants used by fixtures, demos and tests

/// Inter-industry class byte
pub const CLA_ISO: u8 = 0x00;

/// SELECT instruction byte
pub const INS_SELECT: u8 = 0xA4;

/// READ BINARY instruction byte
pub const INS_READ_BINARY: u8 = 0xB0;

/// Status word for normal processing (SW1 SW2)
pub const STATUS_OK: [u8; 2] = [0x90, 0x00];

/// Status word for file or application not found
pub const STATUS_FILE_NOT_FOUND: [u8; 2] = [0x6A, 0x82];
