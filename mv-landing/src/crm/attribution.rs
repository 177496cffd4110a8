//! Campaign-attribution (UTM) records
//!
//! Source, medium and campaign values resolve to records so leads can
//! be filtered by traffic origin; term and content only appear in the
//! lead description.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The record-backed attribution dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtmKind {
    /// Traffic source (e.g. `google`)
    Source,
    /// Traffic medium (e.g. `cpc`)
    Medium,
    /// Campaign name
    Campaign,
}

impl UtmKind {
    /// Storage discriminant for this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Medium => "medium",
            Self::Campaign => "campaign",
        }
    }
}

impl std::fmt::Display for UtmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored attribution value
///
/// Names are matched case-insensitively on lookup but stored with the
/// spelling of the first submission that created them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmRecord {
    /// Record identifier
    pub id: Uuid,
    /// Attribution dimension
    pub kind: UtmKind,
    /// Submitted value
    pub name: String,
}
