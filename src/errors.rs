//! Error reporting capability shared with the surrounding application.

/// Sink receiving the counter's per-tick validation outcome.
///
/// `set_error` returns `false` for a non-empty message (the caller propagates
/// it as a failed tick) and `true` when the message is empty, i.e. cleared.
pub trait ErrorSink {
    fn set_error(&mut self, message: &str) -> bool;
}

/// Last-error holder.
#[derive(Clone, Debug, Default)]
pub struct ErrorMessage {
    message: String,
}

impl ErrorMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.message.is_empty()
    }

    /// Last reported message, empty when the previous tick succeeded.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorSink for ErrorMessage {
    fn set_error(&mut self, message: &str) -> bool {
        self.message.clear();
        self.message.push_str(message);
        self.is_ok()
    }
}

impl<E: ErrorSink + ?Sized> ErrorSink for &mut E {
    fn set_error(&mut self, message: &str) -> bool {
        (**self).set_error(message)
    }
}
