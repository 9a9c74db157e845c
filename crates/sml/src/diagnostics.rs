//! Where non-fatal warnings go.
//!
//! Property accessors never fail; when a stored value has the wrong type they
//! report it here and fall back to the caller's default. Callers pick the sink:
//! [`LogSink`] forwards to the `log` facade, a `Vec<String>` collects messages.

/// Receiver for human-readable warnings.
pub trait DiagnosticSink {
    fn warning(&mut self, message: &str);
}

/// Forwards warnings to `log::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warning(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

impl DiagnosticSink for Vec<String> {
    fn warning(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
