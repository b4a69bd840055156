// Rust guideline compliant 2026-10-16

//! Email adapter for the `Notifier` port.
//!
//! Renders the message an SMTP relay would receive into an output sink. No
//! network connection is made; the credentials are opaque configuration.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use domain::{Notifier, NotifyError};

/// SMTP relay settings. The password is never written or logged.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    /// `host:port` of the relay.
    pub host: String,
    /// Login, also used as the sender address.
    pub user: String,
    /// Login secret.
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `Notifier` adapter that renders each message into a sink.
#[derive(Debug)]
pub struct EmailNotifier<W> {
    credentials: SmtpCredentials,
    out: RefCell<W>,
}

impl<W: Write> EmailNotifier<W> {
    /// Create a notifier relaying through `credentials`, writing to `out`.
    #[must_use]
    pub fn new(credentials: SmtpCredentials, out: W) -> Self {
        Self { credentials, out: RefCell::new(out) }
    }

    /// Consume the notifier and return its sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Notifier for EmailNotifier<W> {
    /// # Errors
    ///
    /// Returns [`NotifyError::DeliveryFailed`] when the sink rejects the write.
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let message = format!(
            "[EMAIL] smtp={} user={} to={to}\nSUBJECT: {subject}\nBODY:\n{body}\n\n",
            self.credentials.host, self.credentials.user,
        );
        let mut out = self.out.borrow_mut();
        out.write_all(message.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| NotifyError::DeliveryFailed { reason: e.to_string() })?;
        tracing::info!(to, "email_notifier.sent");
        Ok(())
    }
}
