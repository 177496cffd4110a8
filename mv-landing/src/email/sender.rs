//! Email sender trait abstraction

use async_trait::async_trait;

use super::{Email, EmailError};

/// Trait for sending emails
///
/// Implemented by the SMTP and console backends and by the test
/// doubles in [`crate::testing`].
///
/// # Examples
///
/// ```rust,no_run
/// use mv_landing::email::{ConsoleBackend, Email, EmailSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let sender = ConsoleBackend::new();
///
/// let email = Email::new()
///     .to("sales@example.com")
///     .from("web@example.com")
///     .subject("New inquiry")
///     .text("A new inquiry arrived.");
///
/// sender.send(email).await?;
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email
    ///
    /// # Errors
    ///
    /// Returns `EmailError` if the email is incomplete or cannot be
    /// delivered
    async fn send(&self, email: Email) -> Result<(), EmailError>;
}
