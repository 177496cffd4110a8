//! Lead classification tags

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name of the tag attached to every landing-page lead
pub const LANDING_TAG: &str = "Landing Page";

/// A labeling record attached to leads for categorization and filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Record identifier
    pub id: Uuid,
    /// Tag display name
    pub name: String,
}
