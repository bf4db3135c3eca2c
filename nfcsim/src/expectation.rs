// nfcsim-rs/nfcsim/src/expectation.rs

use crate::{Error, Result};

/// One declared request/response exchange.
///
/// The compare window is `command[..command_length]`, held against the
/// incoming request starting at `command_offset`. Both buffers are owned by
/// the expectation for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expectation {
    command: Vec<u8>,
    command_offset: usize,
    command_length: usize,
    response: Vec<u8>,
}

/// Result of holding one incoming request against an expectation's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Every byte in the window matched.
    Matched,
    /// The compare window does not fit inside the incoming request.
    OutOfBounds {
        /// Window start index into the incoming request
        offset: usize,
        /// Window length in bytes
        length: usize,
        /// Actual length of the incoming request
        request_len: usize,
    },
    /// A byte inside the window differed.
    Mismatch {
        /// Position of the first differing byte, relative to the window start
        position: usize,
        /// The byte the expectation declared
        expected: u8,
        /// The byte the request actually carried
        actual: u8,
    },
}

impl MatchOutcome {
    /// True for [`MatchOutcome::Matched`].
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

impl Expectation {
    /// Create an expectation comparing `command[..command_length]` against
    /// the incoming request starting at `command_offset`, answering with
    /// `response` on a match.
    ///
    /// Fails if the compare window reaches past the end of the pattern.
    pub fn new(
        command: Vec<u8>,
        command_offset: usize,
        command_length: usize,
        response: Vec<u8>,
    ) -> Result<Self> {
        if command_length > command.len() {
            return Err(Error::PatternWindow {
                length: command_length,
                available: command.len(),
            });
        }
        Ok(Self {
            command,
            command_offset,
            command_length,
            response,
        })
    }

    /// Expectation that compares the whole pattern from request offset zero.
    pub fn exact(command: Vec<u8>, response: Vec<u8>) -> Self {
        let command_length = command.len();
        Self {
            command,
            command_offset: 0,
            command_length,
            response,
        }
    }

    /// The expected (partial) request pattern.
    pub fn command(&self) -> &[u8] {
        &self.command
    }

    /// Start index into the incoming request.
    pub fn command_offset(&self) -> usize {
        self.command_offset
    }

    /// Number of bytes compared.
    pub fn command_length(&self) -> usize {
        self.command_length
    }

    /// The canned response returned on a match.
    pub fn response(&self) -> &[u8] {
        &self.response
    }

    /// Compare an incoming request against this expectation's window, byte
    /// by byte, reporting the first divergence if any.
    pub fn matches(&self, request: &[u8]) -> MatchOutcome {
        let end = match self.command_offset.checked_add(self.command_length) {
            Some(end) if end <= request.len() => end,
            _ => {
                return MatchOutcome::OutOfBounds {
                    offset: self.command_offset,
                    length: self.command_length,
                    request_len: request.len(),
                };
            }
        };

        let window = &request[self.command_offset..end];
        let pattern = &self.command[..self.command_length];
        for (position, (&actual, &expected)) in window.iter().zip(pattern).enumerate() {
            if actual != expected {
                return MatchOutcome::Mismatch {
                    position,
                    expected,
                    actual,
                };
            }
        }
        MatchOutcome::Matched
    }
}
