//! Outbound email: message type, sender seam and backends

pub mod backend;
pub mod notify;
pub mod sender;

pub use backend::{ConsoleBackend, SmtpBackend, SmtpConfig};
pub use sender::EmailSender;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while composing or sending email
#[derive(Debug, Error)]
pub enum EmailError {
    /// Email has no recipients
    #[error("Email has no recipients")]
    NoRecipients,

    /// Email has no sender address
    #[error("Email has no sender address")]
    NoSender,

    /// Email has no subject
    #[error("Email has no subject")]
    NoSubject,

    /// Email has neither text nor HTML content
    #[error("Email has no text or HTML content")]
    NoContent,

    /// Address failed to parse
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Body template failed to render
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(String),

    /// Backend configuration error
    #[error("Email configuration error: {0}")]
    Config(String),
}

impl EmailError {
    /// Create an SMTP transport error
    pub fn smtp(message: impl Into<String>) -> Self {
        Self::Smtp(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// An email message, built up with the builder-style methods
///
/// # Examples
///
/// ```rust
/// use mv_landing::email::Email;
///
/// let email = Email::new()
///     .to("sales@example.com")
///     .from("web@example.com")
///     .subject("New inquiry")
///     .text("A new inquiry arrived.");
///
/// assert!(email.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Email {
    /// Sender address
    pub from: Option<String>,
    /// Recipient addresses
    pub to: Vec<String>,
    /// Carbon-copy addresses
    pub cc: Vec<String>,
    /// Blind carbon-copy addresses
    pub bcc: Vec<String>,
    /// Reply-To address
    pub reply_to: Option<String>,
    /// Subject line
    pub subject: Option<String>,
    /// Plain-text body
    pub text: Option<String>,
    /// HTML body
    pub html: Option<String>,
}

impl Email {
    /// Create an empty message
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient
    #[must_use]
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Add a carbon-copy recipient
    #[must_use]
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Add a blind carbon-copy recipient
    #[must_use]
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Set the sender address
    #[must_use]
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    /// Set the Reply-To address
    #[must_use]
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }

    /// Set the subject line
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain-text body
    #[must_use]
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text = Some(body.into());
        self
    }

    /// Set the HTML body
    #[must_use]
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = Some(body.into());
        self
    }

    /// Check the message is complete enough to send.
    pub fn validate(&self) -> Result<(), EmailError> {
        if self.to.is_empty() {
            return Err(EmailError::NoRecipients);
        }
        if self.from.is_none() {
            return Err(EmailError::NoSender);
        }
        if self.subject.is_none() {
            return Err(EmailError::NoSubject);
        }
        if self.text.is_none() && self.html.is_none() {
            return Err(EmailError::NoContent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Email {
        Email::new()
            .to("sales@example.com")
            .from("web@example.com")
            .subject("New inquiry")
            .text("body")
    }

    #[test]
    fn complete_email_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn missing_pieces_are_reported() {
        let no_recipient = Email::new().from("a@b").subject("s").text("t");
        assert!(matches!(
            no_recipient.validate(),
            Err(EmailError::NoRecipients)
        ));

        let no_sender = Email::new().to("a@b").subject("s").text("t");
        assert!(matches!(no_sender.validate(), Err(EmailError::NoSender)));

        let no_subject = Email::new().to("a@b").from("c@d").text("t");
        assert!(matches!(no_subject.validate(), Err(EmailError::NoSubject)));

        let no_content = Email::new().to("a@b").from("c@d").subject("s");
        assert!(matches!(no_content.validate(), Err(EmailError::NoContent)));
    }

    #[test]
    fn builder_accumulates_recipients() {
        let email = complete().to("second@example.com").cc("cc@example.com");
        assert_eq!(email.to.len(), 2);
        assert_eq!(email.cc, vec!["cc@example.com"]);
    }
}
