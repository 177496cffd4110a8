//! Submission notification email
//!
//! Composes and sends the internal notice for a stored lead. The whole
//! module is best-effort: the submitter's response is already decided
//! by the time this runs, so every failure here is logged and dropped.

use askama::Template;

use crate::config::{ContactSettings, LandingConfig};
use crate::crm::{assemble, Lead};
use crate::forms::{interest_label, ContactForm};

use super::{Email, EmailError, EmailSender};

/// Recipient of last resort when no mailbox is configured
pub const FALLBACK_RECIPIENT: &str = "info@michalvarys.eu";

/// Resolve the notification mailbox.
///
/// Fallback chain: website mailbox (`contact.notify_email`), company
/// mailbox (`contact.company_email`), then [`FALLBACK_RECIPIENT`].
/// Empty strings count as unset.
#[must_use]
pub fn notify_recipient(contact: &ContactSettings) -> String {
    contact
        .notify_email
        .clone()
        .filter(|address| !address.is_empty())
        .or_else(|| {
            contact
                .company_email
                .clone()
                .filter(|address| !address.is_empty())
        })
        .unwrap_or_else(|| FALLBACK_RECIPIENT.to_string())
}

#[derive(Template)]
#[template(path = "email/lead_notice.html")]
struct LeadNoticeTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    interest: &'a str,
    message: &'a str,
    utm_summary: String,
    lead_url: String,
}

/// Compose the notification message for a stored lead.
///
/// The subject carries the lead name; the body is a fixed-layout HTML
/// table of the submitted fields plus a deep link to the record.
/// `Reply-To` points at the submitter so the sales mailbox can answer
/// directly.
pub fn submission_notice(
    form: &ContactForm,
    lead: &Lead,
    config: &LandingConfig,
) -> Result<Email, EmailError> {
    let lead_url = format!(
        "{}/crm/leads/{}",
        config.service.base_url.trim_end_matches('/'),
        lead.id
    );

    let html = LeadNoticeTemplate {
        name: &form.name,
        email: &form.email,
        phone: &form.phone,
        company: &form.company,
        interest: interest_label(&form.interest),
        message: &form.message,
        utm_summary: assemble::utm_summary(form),
        lead_url,
    }
    .render()?;

    Ok(Email::new()
        .to(notify_recipient(&config.contact))
        .from(config.smtp.from_email.clone())
        .reply_to(form.email.as_str())
        .subject(lead.name.as_str())
        .html(html))
}

/// Compose and send the notice, swallowing every failure.
pub async fn send_submission_notice(
    mailer: &dyn EmailSender,
    form: &ContactForm,
    lead: &Lead,
    config: &LandingConfig,
) {
    match submission_notice(form, lead, config) {
        Ok(email) => {
            if let Err(error) = mailer.send(email).await {
                tracing::warn!(%error, lead_id = %lead.id, "Failed to send lead notification");
            }
        }
        Err(error) => {
            tracing::warn!(%error, lead_id = %lead.id, "Failed to compose lead notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::{LeadKind, NewLead};
    use crate::testing::{FailingMailer, RecordingMailer};
    use chrono::Utc;
    use uuid::Uuid;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jan Novák".to_string(),
            email: "jan@example.com".to_string(),
            interest: "eshop".to_string(),
            company: "Pekárna <U Nováků>".to_string(),
            ..ContactForm::default()
        }
    }

    fn lead(form: &ContactForm) -> Lead {
        let payload = NewLead {
            name: "[Landing] E-shop - Jan Novák".to_string(),
            contact_name: form.name.clone(),
            email_from: form.email.clone(),
            phone: None,
            partner_name: Some(form.company.clone()),
            description: "Zájem o: E-shop".to_string(),
            kind: LeadKind::Opportunity,
            team_id: None,
            user_id: None,
            tag_ids: vec![],
            source_id: None,
            medium_id: None,
            campaign_id: None,
        };
        Lead::from_new(Uuid::new_v4(), Utc::now(), payload)
    }

    #[test]
    fn recipient_fallback_chain() {
        let both = ContactSettings {
            notify_email: Some("poptavky@michalvarys.eu".to_string()),
            company_email: Some("info@firma.cz".to_string()),
        };
        assert_eq!(notify_recipient(&both), "poptavky@michalvarys.eu");

        let company_only = ContactSettings {
            notify_email: Some(String::new()),
            company_email: Some("info@firma.cz".to_string()),
        };
        assert_eq!(notify_recipient(&company_only), "info@firma.cz");

        assert_eq!(
            notify_recipient(&ContactSettings::default()),
            FALLBACK_RECIPIENT
        );
    }

    #[test]
    fn notice_carries_subject_deep_link_and_reply_to() {
        let form = form();
        let lead = lead(&form);
        let mut config = LandingConfig::default();
        config.service.base_url = "https://michalvarys.eu/".to_string();

        let email = submission_notice(&form, &lead, &config).unwrap();

        assert_eq!(email.subject.as_deref(), Some("[Landing] E-shop - Jan Novák"));
        assert_eq!(email.reply_to.as_deref(), Some("jan@example.com"));
        assert_eq!(email.to, vec![FALLBACK_RECIPIENT.to_string()]);

        let html = email.html.unwrap();
        assert!(html.contains(&format!("https://michalvarys.eu/crm/leads/{}", lead.id)));
        assert!(html.contains("E-shop"));
        // User input is escaped by the template engine
        assert!(html.contains("Pekárna"));
        assert!(!html.contains("<U Nováků>"));
    }

    #[tokio::test]
    async fn send_failure_is_swallowed() {
        let form = form();
        let lead = lead(&form);
        let config = LandingConfig::default();

        // Must not panic or propagate
        send_submission_notice(&FailingMailer, &form, &lead, &config).await;
    }

    #[tokio::test]
    async fn notice_is_delivered_to_resolved_recipient() {
        let form = form();
        let lead = lead(&form);
        let mut config = LandingConfig::default();
        config.contact.notify_email = Some("poptavky@michalvarys.eu".to_string());

        let mailer = RecordingMailer::new();
        send_submission_notice(&mailer, &form, &lead, &config).await;

        assert_eq!(mailer.sent_count(), 1);
        assert!(mailer.was_sent_to("poptavky@michalvarys.eu"));
    }
}
