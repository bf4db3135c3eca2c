// nfcsim-rs/nfcsim/src/reader/mock.rs

use std::fmt;

use crate::Result;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::expectation::{Expectation, MatchOutcome};
use crate::reader::traits::NfcReader;
use crate::utils::hex_byte;

/// Mock reader for unit tests. It holds an ordered script of expected
/// request/response exchanges and verifies each incoming command against the
/// next pending entry, answering with that entry's canned response.
///
/// Expectations are consumed strictly in declaration order; there is no
/// best-match search and no skipping. A failed match leaves the same
/// expectation pending for the following call.
pub struct MockReader {
    expectations: Vec<Expectation>,
    /// Expectations successfully matched so far; advances only on a match.
    executed: usize,
    /// Exchange attempts so far, matched or not.
    attempted: usize,
    sink: Box<dyn DiagnosticSink>,
}

impl MockReader {
    /// Create a reader whose diagnostics go to the `log` facade.
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogSink))
    }

    /// Create a reader reporting diagnostics into the given sink.
    pub fn with_sink(sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            expectations: Vec::new(),
            executed: 0,
            attempted: 0,
            sink,
        }
    }

    /// Reset the script and announce that `count` exchanges will be declared
    /// next. `count` is a capacity hint only; the script grows as needed
    /// when more declarations follow.
    ///
    /// Previously declared expectations and their buffers are dropped here.
    pub fn expect_commands(&mut self, count: usize) {
        self.expectations = Vec::with_capacity(count);
        self.executed = 0;
        self.attempted = 0;
    }

    /// Append one expected exchange. The compare window is
    /// `command[..command_length]`, held against the incoming request
    /// starting at `command_offset`; `response` is returned verbatim on a
    /// match. Both buffers move into the script.
    ///
    /// Fails if the compare window reaches past the end of the pattern.
    pub fn expect_command(
        &mut self,
        command: Vec<u8>,
        command_offset: usize,
        command_length: usize,
        response: Vec<u8>,
    ) -> Result<()> {
        let expectation = Expectation::new(command, command_offset, command_length, response)?;
        self.expect(expectation);
        Ok(())
    }

    /// Append one pre-built expectation.
    pub fn expect(&mut self, expectation: Expectation) {
        self.expectations.push(expectation);
    }

    /// True iff exactly the declared number of exchanges happened and every
    /// one of them matched. False while attempts are outstanding and false
    /// forever once any attempt failed or overflowed.
    pub fn all_expected_commands_executed(&self) -> bool {
        self.expectations.len() == self.executed && self.expectations.len() == self.attempted
    }

    /// Drop every stored expectation and its buffers. Counters are reset by
    /// the next [`MockReader::expect_commands`] call.
    pub fn clear(&mut self) {
        self.expectations.clear();
    }

    /// Number of declared expectations.
    pub fn expected_count(&self) -> usize {
        self.expectations.len()
    }

    /// Number of successfully matched exchanges.
    pub fn executed_count(&self) -> usize {
        self.executed
    }

    /// Number of exchange attempts, matched or not.
    pub fn attempted_count(&self) -> usize {
        self.attempted
    }
}

impl Default for MockReader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockReader")
            .field("expected", &self.expectations.len())
            .field("executed", &self.executed)
            .field("attempted", &self.attempted)
            .finish_non_exhaustive()
    }
}

impl NfcReader for MockReader {
    fn begin(&mut self) {
        // Nothing to initialize in the mock
    }

    fn detect_card(&mut self) -> bool {
        // Simulate a card always present at the terminal
        true
    }

    fn send_command(&mut self, command: &[u8], response: &mut [u8]) -> bool {
        self.attempted += 1;
        if self.attempted > self.expectations.len() {
            self.sink
                .report("tried to execute more commands than expected");
            return false;
        }

        let index = self.executed;
        match self.expectations[index].matches(command) {
            MatchOutcome::Matched => {}
            MatchOutcome::OutOfBounds {
                offset,
                length,
                request_len,
            } => {
                self.sink.report(&format!(
                    "command at index {index} cannot be checked \
                     (window {offset}+{length} exceeds request length {request_len})"
                ));
                return false;
            }
            MatchOutcome::Mismatch {
                position,
                expected,
                actual,
            } => {
                self.sink.report(&format!(
                    "command at index {index} was not expected \
                     (byte {position} was different: expected {} but received {})",
                    hex_byte(expected),
                    hex_byte(actual)
                ));
                return false;
            }
        }

        let stored = self.expectations[index].response();
        if response.len() > stored.len() {
            let available = stored.len();
            let requested = response.len();
            self.sink.report(&format!(
                "response at index {index} has only {available} bytes \
                 but {requested} were requested"
            ));
            return false;
        }
        response.copy_from_slice(&stored[..response.len()]);
        self.executed += 1;
        true
    }
}
