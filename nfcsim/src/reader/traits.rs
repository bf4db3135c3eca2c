// nfcsim-rs/nfcsim/src/reader/traits.rs

/// NfcReader trait abstracts the reader away from the library under test.
///
/// A real reader drives hardware behind these three calls; the mock replays
/// a scripted exchange. The trait is object-safe so the library under test
/// can hold a `Box<dyn NfcReader>` or `&mut dyn NfcReader`.
pub trait NfcReader {
    /// Initialize the reader
    fn begin(&mut self);

    /// Check whether a card is present at the terminal
    fn detect_card(&mut self) -> bool;

    /// Execute one request/response exchange. `response.len()` is the
    /// number of response bytes the caller wants copied back. Returns false
    /// when the exchange failed; the response buffer is untouched then.
    fn send_command(&mut self, command: &[u8], response: &mut [u8]) -> bool;
}
