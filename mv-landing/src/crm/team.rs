//! Sales team directory entries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sales team, optionally with a default owner for new leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesTeam {
    /// Record identifier
    pub id: Uuid,
    /// Team display name
    pub name: String,
    /// Default salesperson assigned to leads routed to this team
    pub user_id: Option<Uuid>,
}
