//! Diagnostic Sinks
//!
//! Every failed conversion reports exactly one human-readable message
//! to a sink before the error is returned.

/// Log target used for marshalling diagnostics
pub const LOG_TARGET: &str = "gcode_parser";

/// Receiver of diagnostic messages
pub trait DiagnosticSink {
    fn emit(&mut self, message: &str);
}

/// Forwards diagnostics to the `log` facade at error level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, message: &str) {
        log::error!(target: LOG_TARGET, "{}", message);
    }
}

/// Keeps every diagnostic in memory
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub messages: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
