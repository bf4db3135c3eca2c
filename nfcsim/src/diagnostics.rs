// nfcsim-rs/nfcsim/src/diagnostics.rs

//! Diagnostic output for the mock reader.
//!
//! The ledger reports overflow and mismatch conditions through an injected
//! sink, so the core has no hidden dependency on a particular output channel
//! and tests can assert on the emitted lines.

use std::cell::RefCell;
use std::rc::Rc;

/// Receives one text line per reported condition.
pub trait DiagnosticSink {
    /// Report a single diagnostic line.
    fn report(&mut self, line: &str);
}

/// Default sink: forwards lines to the `log` facade at warn level.
///
/// Consumers that want the output on a console enable `env_logger` (or any
/// other `log` backend) in their test or example setup.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, line: &str) {
        log::warn!(target: "nfcsim", "{}", line);
    }
}

/// Capturing sink for tests.
///
/// Clones share the same line buffer, so a test can keep one handle while
/// the reader owns the other.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureSink {
    /// Create an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// True when nothing has been reported yet.
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl DiagnosticSink for CaptureSink {
    fn report(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
