//! Test doubles for the email seam

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::email::{Email, EmailError, EmailSender};

/// Mailer that captures sent emails in memory for assertions
///
/// # Examples
///
/// ```rust
/// use mv_landing::email::{Email, EmailSender};
/// use mv_landing::testing::RecordingMailer;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mailer = RecordingMailer::new();
///
/// let email = Email::new()
///     .to("sales@example.com")
///     .from("web@example.com")
///     .subject("New inquiry")
///     .text("body");
///
/// mailer.send(email).await?;
///
/// assert_eq!(mailer.sent_count(), 1);
/// assert!(mailer.was_sent_to("sales@example.com"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingMailer {
    /// Create a new recording mailer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of emails sent
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// All sent emails
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn sent_emails(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recently sent email
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn last_sent(&self) -> Option<Email> {
        self.sent.lock().unwrap().last().cloned()
    }

    /// Whether an email was sent to the given address
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (should never happen in tests)
    #[must_use]
    pub fn was_sent_to(&self, address: &str) -> bool {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .any(|email| email.to.contains(&address.to_string()))
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        email.validate()?;
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Mailer whose sends always fail; exercises the best-effort path
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingMailer;

#[async_trait]
impl EmailSender for FailingMailer {
    async fn send(&self, _email: Email) -> Result<(), EmailError> {
        Err(EmailError::smtp("simulated transport failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(subject: &str) -> Email {
        Email::new()
            .to("sales@example.com")
            .from("web@example.com")
            .subject(subject)
            .text("body")
    }

    #[tokio::test]
    async fn recording_mailer_captures_sends() {
        let mailer = RecordingMailer::new();

        mailer.send(email("First")).await.unwrap();
        mailer.send(email("Second")).await.unwrap();

        assert_eq!(mailer.sent_count(), 2);
        assert!(mailer.was_sent_to("sales@example.com"));
        assert_eq!(
            mailer.last_sent().unwrap().subject.as_deref(),
            Some("Second")
        );
    }

    #[tokio::test]
    async fn recording_mailer_rejects_incomplete_email() {
        let mailer = RecordingMailer::new();

        let incomplete = Email::new().from("web@example.com").subject("s").text("t");
        assert!(mailer.send(incomplete).await.is_err());
        assert_eq!(mailer.sent_count(), 0);
    }

    #[tokio::test]
    async fn failing_mailer_always_fails() {
        let result = FailingMailer.send(email("any")).await;
        assert!(matches!(result, Err(EmailError::Smtp(_))));
    }
}
