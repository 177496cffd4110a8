//! SMTP backend
//!
//! Sends mail through the `lettre` crate. Connection parameters come
//! from the `[smtp]` configuration section rather than the process
//! environment, so the backend is only constructed when a host is
//! actually configured.

use async_trait::async_trait;
use lettre::{
    message::{header, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::SmtpSettings;
use crate::email::{Email, EmailError, EmailSender};

/// SMTP connection parameters
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port (usually 587 for STARTTLS)
    pub port: u16,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Use STARTTLS
    pub use_tls: bool,
}

impl SmtpConfig {
    /// Build connection parameters from the `[smtp]` settings section.
    ///
    /// Returns `None` when no host is configured, which selects the
    /// console backend instead.
    #[must_use]
    pub fn from_settings(settings: &SmtpSettings) -> Option<Self> {
        let host = settings.host.as_ref().filter(|host| !host.is_empty())?;
        Some(Self {
            host: host.clone(),
            port: settings.port,
            username: settings.username.clone(),
            password: settings.password.clone(),
            use_tls: settings.use_tls,
        })
    }
}

/// SMTP email backend
pub struct SmtpBackend {
    config: SmtpConfig,
}

impl SmtpBackend {
    /// Create a new SMTP backend with the given connection parameters
    #[must_use]
    pub const fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Build a lettre [`Message`] from an [`Email`]
    fn build_message(email: &Email) -> Result<Message, EmailError> {
        email.validate()?;

        let from_addr = email.from.as_ref().ok_or(EmailError::NoSender)?;
        let from: Mailbox = from_addr
            .parse()
            .map_err(|_| EmailError::InvalidAddress(from_addr.clone()))?;

        let mut builder = Message::builder().from(from);

        for to_addr in &email.to {
            let to: Mailbox = to_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to_addr.clone()))?;
            builder = builder.to(to);
        }

        for cc_addr in &email.cc {
            let cc: Mailbox = cc_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(cc_addr.clone()))?;
            builder = builder.cc(cc);
        }

        for bcc_addr in &email.bcc {
            let bcc: Mailbox = bcc_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(bcc_addr.clone()))?;
            builder = builder.bcc(bcc);
        }

        if let Some(reply_to_addr) = &email.reply_to {
            let reply_to: Mailbox = reply_to_addr
                .parse()
                .map_err(|_| EmailError::InvalidAddress(reply_to_addr.clone()))?;
            builder = builder.reply_to(reply_to);
        }

        let subject = email.subject.as_ref().ok_or(EmailError::NoSubject)?;
        builder = builder.subject(subject);

        let message = if let (Some(html), Some(text)) = (&email.html, &email.text) {
            builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_PLAIN)
                                .body(text.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(header::ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(html) = &email.html {
            builder
                .header(header::ContentType::TEXT_HTML)
                .body(html.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else if let Some(text) = &email.text {
            builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(text.clone())
                .map_err(|e| EmailError::smtp(e.to_string()))?
        } else {
            return Err(EmailError::NoContent);
        };

        Ok(message)
    }

    /// Create the SMTP transport from the stored parameters
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let credentials = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );

        let mut transport = if self.config.use_tls {
            let tls_parameters = TlsParameters::new(self.config.host.clone())
                .map_err(|e| EmailError::smtp(format!("TLS parameters error: {e}")))?;

            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
                .map_err(|e| EmailError::smtp(e.to_string()))?
                .credentials(credentials)
                .tls(Tls::Required(tls_parameters))
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.host)
                .credentials(credentials)
        };

        transport = transport.port(self.config.port);

        Ok(transport.build())
    }
}

#[async_trait]
impl EmailSender for SmtpBackend {
    async fn send(&self, email: Email) -> Result<(), EmailError> {
        let message = Self::build_message(&email)?;
        let transport = self.create_transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| EmailError::smtp(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(host: Option<&str>) -> SmtpSettings {
        SmtpSettings {
            host: host.map(ToString::to_string),
            ..SmtpSettings::default()
        }
    }

    #[test]
    fn config_requires_host() {
        assert!(SmtpConfig::from_settings(&settings(None)).is_none());
        assert!(SmtpConfig::from_settings(&settings(Some(""))).is_none());

        let config = SmtpConfig::from_settings(&settings(Some("smtp.example.com"))).unwrap();
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert!(config.use_tls);
    }

    #[test]
    fn build_message_html_only() {
        let email = Email::new()
            .to("sales@example.com")
            .from("web@example.com")
            .subject("New inquiry")
            .html("<h2>New inquiry</h2>");

        assert!(SmtpBackend::build_message(&email).is_ok());
    }

    #[test]
    fn build_message_with_reply_to_and_both_bodies() {
        let email = Email::new()
            .to("sales@example.com")
            .from("web@example.com")
            .reply_to("jan@example.com")
            .subject("New inquiry")
            .text("plain")
            .html("<p>html</p>");

        assert!(SmtpBackend::build_message(&email).is_ok());
    }

    #[test]
    fn build_message_rejects_bad_address() {
        let email = Email::new()
            .to("not an address")
            .from("web@example.com")
            .subject("New inquiry")
            .text("plain");

        assert!(matches!(
            SmtpBackend::build_message(&email),
            Err(EmailError::InvalidAddress(_))
        ));
    }
}
