use std::sync::mpsc::Sender;

/// One-way stream of human-readable status lines.
///
/// The engine emits in call order and never waits for acknowledgement, so
/// an implementation must not block. Nothing is read back from the sink.
pub trait ProgressSink {
    fn emit(&mut self, message: &str);
}

/// Adapter turning any `FnMut(&str)` closure into a sink.
pub struct FnSink<F: FnMut(&str)>(pub F);

impl<F: FnMut(&str)> ProgressSink for FnSink<F> {
    fn emit(&mut self, message: &str) {
        (self.0)(message);
    }
}

/// Collects messages, mainly for tests.
impl ProgressSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Mailbox form for a front-end that drains progress on another thread.
/// A disconnected receiver is not an error; the message is dropped.
impl ProgressSink for Sender<String> {
    fn emit(&mut self, message: &str) {
        let _ = self.send(message.to_string());
    }
}

/// Discards everything, for callers that do not want progress.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&mut self, _message: &str) {}
}
