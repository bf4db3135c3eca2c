//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockReader setup and APDU construction so
//! tests across the crate and the tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{CLA_ISO, INS_READ_BINARY, INS_SELECT, STATUS_OK};
use crate::diagnostics::CaptureSink;
use crate::expectation::Expectation;
use crate::reader::{MockReader, NfcReader};

/// Build a MockReader pre-loaded with the given script and a capturing
/// sink; returns the reader plus a handle to the captured diagnostics.
#[doc(hidden)]
pub fn captured_reader(script: Vec<Expectation>) -> (MockReader, CaptureSink) {
    let sink = CaptureSink::new();
    let mut reader = MockReader::with_sink(Box::new(sink.clone()));
    reader.expect_commands(script.len());
    for expectation in script {
        reader.expect(expectation);
    }
    (reader, sink)
}

/// Convenience: pre-loaded reader boxed as an NfcReader trait object, the
/// way the library under test receives it.
#[doc(hidden)]
pub fn boxed_reader(script: Vec<Expectation>) -> Box<dyn NfcReader> {
    let (reader, _sink) = captured_reader(script);
    Box::new(reader)
}

/// SELECT (by dedicated file name) APDU for the given identifier.
#[doc(hidden)]
pub fn select_apdu(file_id: &[u8]) -> Vec<u8> {
    let mut apdu = vec![CLA_ISO, INS_SELECT, 0x04, 0x0C, file_id.len() as u8];
    apdu.extend_from_slice(file_id);
    apdu
}

/// READ BINARY APDU at the given offset requesting `length` bytes.
#[doc(hidden)]
pub fn read_binary_apdu(offset: u16, length: u8) -> Vec<u8> {
    let [hi, lo] = offset.to_be_bytes();
    vec![CLA_ISO, INS_READ_BINARY, hi, lo, length]
}

/// Canned response: `data` followed by the normal-processing status word.
#[doc(hidden)]
pub fn ok_response(data: &[u8]) -> Vec<u8> {
    let mut response = data.to_vec();
    response.extend_from_slice(&STATUS_OK);
    response
}
