// Rust guideline compliant 2026-10-16

//! No-op adapter for the `Notifier` port.

use domain::{Notifier, NotifyError};

/// `Notifier` adapter that accepts every message and sends nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl NullNotifier {
    /// Create a new null notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for NullNotifier {
    fn send(&self, to: &str, _subject: &str, _body: &str) -> Result<(), NotifyError> {
        tracing::debug!(to, "null_notifier.discarded");
        Ok(())
    }
}
