//! Opportunity records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline stage classification of a CRM record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadKind {
    /// Unqualified inquiry
    Lead,
    /// Qualified sales opportunity; every landing-page submission is
    /// created directly at this stage
    Opportunity,
}

impl LeadKind {
    /// Storage discriminant for this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Opportunity => "opportunity",
        }
    }
}

/// Fields for creating a lead; assembled by [`super::assemble::lead_payload`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    /// Pipeline display name, e.g. `[Landing] E-shop - Jan Novák`
    pub name: String,
    /// Submitter name
    pub contact_name: String,
    /// Submitter email
    pub email_from: String,
    /// Submitter phone, when given
    pub phone: Option<String>,
    /// Company or website name, when given
    pub partner_name: Option<String>,
    /// Human-readable summary of the submission
    pub description: String,
    /// Pipeline stage
    pub kind: LeadKind,
    /// Sales team the lead is routed to
    pub team_id: Option<Uuid>,
    /// Salesperson owning the lead
    pub user_id: Option<Uuid>,
    /// Classification tags
    pub tag_ids: Vec<Uuid>,
    /// Attribution source record
    pub source_id: Option<Uuid>,
    /// Attribution medium record
    pub medium_id: Option<Uuid>,
    /// Attribution campaign record
    pub campaign_id: Option<Uuid>,
}

/// A stored opportunity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Record identifier
    pub id: Uuid,
    /// Pipeline display name
    pub name: String,
    /// Submitter name
    pub contact_name: String,
    /// Submitter email
    pub email_from: String,
    /// Submitter phone, when given
    pub phone: Option<String>,
    /// Company or website name, when given
    pub partner_name: Option<String>,
    /// Human-readable summary of the submission
    pub description: String,
    /// Pipeline stage
    pub kind: LeadKind,
    /// Sales team the lead is routed to
    pub team_id: Option<Uuid>,
    /// Salesperson owning the lead
    pub user_id: Option<Uuid>,
    /// Classification tags
    pub tag_ids: Vec<Uuid>,
    /// Attribution source record
    pub source_id: Option<Uuid>,
    /// Attribution medium record
    pub medium_id: Option<Uuid>,
    /// Attribution campaign record
    pub campaign_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Materialize a creation payload into a stored record.
    #[must_use]
    pub fn from_new(id: Uuid, created_at: DateTime<Utc>, new: NewLead) -> Self {
        Self {
            id,
            name: new.name,
            contact_name: new.contact_name,
            email_from: new.email_from,
            phone: new.phone,
            partner_name: new.partner_name,
            description: new.description,
            kind: new.kind,
            team_id: new.team_id,
            user_id: new.user_id,
            tag_ids: new.tag_ids,
            source_id: new.source_id,
            medium_id: new.medium_id,
            campaign_id: new.campaign_id,
            created_at,
        }
    }
}
