//! Console backend for development
//!
//! Logs messages instead of sending them, so the contact flow can be
//! exercised without SMTP credentials.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::email::{Email, EmailError, EmailSender};

/// Console email backend for development
///
/// # Examples
///
/// ```rust
/// use mv_landing::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backend = ConsoleBackend::verbose();
///
/// let email = Email::new()
///     .to("sales@example.com")
///     .from("web@example.com")
///     .subject("New inquiry")
///     .text("A new inquiry arrived.");
///
/// backend.send(email).await?; // Logged, not delivered
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConsoleBackend {
    /// Whether message bodies are logged as well
    verbose: bool,
}

impl ConsoleBackend {
    /// Create a console backend that logs metadata only
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console backend that also logs message bodies
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

#[async_trait]
impl EmailSender for ConsoleBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.validate()?;

        let from = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;

        info!(
            from = %from,
            to = ?email.to,
            reply_to = ?email.reply_to,
            subject = %subject,
            "Console email sent"
        );

        if self.verbose {
            if let Some(text) = &email.text {
                debug!(text = %text, "Email text content");
            }
            if let Some(html) = &email.html {
                debug!(html = %html, "Email HTML content");
            }
        }

        Ok(())
    }
}
