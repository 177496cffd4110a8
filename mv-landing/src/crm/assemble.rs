//! Mapping validated submissions onto the lead-creation payload
//!
//! Pure functions so the description layout and field mapping are
//! testable without storage.

use crate::forms::{interest_label, ContactForm};

use super::{LeadKind, NewLead, SalesTeam, Tag, UtmLinks};

/// Pipeline display name for a submission.
#[must_use]
pub fn lead_name(interest_label: &str, contact_name: &str) -> String {
    format!("[Landing] {interest_label} - {contact_name}")
}

/// Single-line summary of the submitted attribution fields.
///
/// Lists only the fields that were submitted; empty when none were.
/// Term and content appear here even though they are not record-backed.
#[must_use]
pub fn utm_summary(form: &ContactForm) -> String {
    let mut pairs = Vec::new();
    for (label, value) in [
        ("source", &form.utm_source),
        ("medium", &form.utm_medium),
        ("campaign", &form.utm_campaign),
        ("term", &form.utm_term),
        ("content", &form.utm_content),
    ] {
        if !value.is_empty() {
            pairs.push(format!("{label}={value}"));
        }
    }

    if pairs.is_empty() {
        String::new()
    } else {
        format!("UTM: {}", pairs.join(", "))
    }
}

/// Build the human-readable lead description.
///
/// Parts appear in fixed order, each on its own line, omitting what
/// was not submitted: internal note, company, interest (always),
/// phone, free-text message (separated by a blank line), attribution
/// summary.
#[must_use]
pub fn build_description(form: &ContactForm, interest_label: &str) -> String {
    let mut parts = Vec::new();

    if !form.crm_note.is_empty() {
        parts.push(format!("Interní poznámka: {}", form.crm_note));
    }
    if !form.company.is_empty() {
        parts.push(format!("Firma / Web: {}", form.company));
    }
    parts.push(format!("Zájem o: {interest_label}"));
    if !form.phone.is_empty() {
        parts.push(format!("Telefon: {}", form.phone));
    }
    if !form.message.is_empty() {
        parts.push(format!("\n{}", form.message));
    }

    let summary = utm_summary(form);
    if !summary.is_empty() {
        parts.push(summary);
    }

    parts.join("\n")
}

/// Map a validated submission and its resolved references onto the
/// record-creation payload.
#[must_use]
pub fn lead_payload(
    form: &ContactForm,
    team: Option<&SalesTeam>,
    tag: &Tag,
    utm: &UtmLinks,
) -> NewLead {
    let label = interest_label(&form.interest);

    NewLead {
        name: lead_name(label, &form.name),
        contact_name: form.name.clone(),
        email_from: form.email.clone(),
        phone: (!form.phone.is_empty()).then(|| form.phone.clone()),
        partner_name: (!form.company.is_empty()).then(|| form.company.clone()),
        description: build_description(form, label),
        kind: LeadKind::Opportunity,
        team_id: team.map(|team| team.id),
        user_id: team.and_then(|team| team.user_id),
        tag_ids: vec![tag.id],
        source_id: utm.source.as_ref().map(|record| record.id),
        medium_id: utm.medium.as_ref().map(|record| record.id),
        campaign_id: utm.campaign.as_ref().map(|record| record.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jan Novák".to_string(),
            email: "jan@example.com".to_string(),
            interest: "eshop".to_string(),
            ..ContactForm::default()
        }
    }

    fn tag() -> Tag {
        Tag {
            id: Uuid::new_v4(),
            name: "Landing Page".to_string(),
        }
    }

    #[test]
    fn lead_name_carries_label_and_contact() {
        assert_eq!(
            lead_name("E-shop", "Jan Novák"),
            "[Landing] E-shop - Jan Novák"
        );
    }

    #[test]
    fn minimal_description_is_interest_only() {
        assert_eq!(build_description(&form(), "E-shop"), "Zájem o: E-shop");
    }

    #[test]
    fn full_description_keeps_fixed_order() {
        let form = ContactForm {
            phone: "+420 777 123 456".to_string(),
            company: "Pekárna U Nováků".to_string(),
            message: "Potřebuji nový web.".to_string(),
            crm_note: "volat po obědě".to_string(),
            utm_source: "google".to_string(),
            utm_term: "tvorba webu".to_string(),
            ..form()
        };

        let description = build_description(&form, "E-shop");
        assert_eq!(
            description,
            "Interní poznámka: volat po obědě\n\
             Firma / Web: Pekárna U Nováků\n\
             Zájem o: E-shop\n\
             Telefon: +420 777 123 456\n\
             \n\
             Potřebuji nový web.\n\
             UTM: source=google, term=tvorba webu"
        );
    }

    #[test]
    fn utm_summary_lists_submitted_fields_only() {
        assert_eq!(utm_summary(&form()), "");

        let form = ContactForm {
            utm_source: "seznam".to_string(),
            utm_medium: "cpc".to_string(),
            utm_content: "banner-a".to_string(),
            ..form()
        };
        assert_eq!(
            utm_summary(&form),
            "UTM: source=seznam, medium=cpc, content=banner-a"
        );
    }

    #[test]
    fn payload_maps_optional_fields() {
        let team = SalesTeam {
            id: Uuid::new_v4(),
            name: "Prodej".to_string(),
            user_id: Some(Uuid::new_v4()),
        };
        let tag = tag();

        let payload = lead_payload(&form(), Some(&team), &tag, &UtmLinks::default());

        assert_eq!(payload.name, "[Landing] E-shop - Jan Novák");
        assert_eq!(payload.contact_name, "Jan Novák");
        assert_eq!(payload.email_from, "jan@example.com");
        assert_eq!(payload.phone, None);
        assert_eq!(payload.partner_name, None);
        assert_eq!(payload.kind, LeadKind::Opportunity);
        assert_eq!(payload.team_id, Some(team.id));
        assert_eq!(payload.user_id, team.user_id);
        assert_eq!(payload.tag_ids, vec![tag.id]);
        assert_eq!(payload.source_id, None);
    }

    #[test]
    fn payload_without_team_leaves_routing_unset() {
        let payload = lead_payload(&form(), None, &tag(), &UtmLinks::default());
        assert_eq!(payload.team_id, None);
        assert_eq!(payload.user_id, None);
    }

    #[test]
    fn unknown_interest_code_passes_through() {
        let form = ContactForm {
            interest: "xyz".to_string(),
            ..form()
        };
        let payload = lead_payload(&form, None, &tag(), &UtmLinks::default());

        assert_eq!(payload.name, "[Landing] xyz - Jan Novák");
        assert!(payload.description.contains("Zájem o: xyz"));
    }
}
