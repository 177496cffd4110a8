//! Storage seam for CRM records

mod memory;
mod postgres;

pub use memory::InMemoryCrmStore;
pub use postgres::PgCrmStore;

use async_trait::async_trait;
use thiserror::Error;

use super::{Lead, NewLead, SalesTeam, Tag, UtmKind, UtmRecord};

/// Errors raised by CRM storage backends
#[derive(Debug, Error)]
pub enum CrmError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Storage operations consumed by the contact intake flow
///
/// Lookups are primitive by intent: find-or-create composition lives
/// in [`super::resolve`] so both backends share its semantics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrmStore: Send + Sync {
    /// First team in the sales directory, if any.
    async fn default_team(&self) -> Result<Option<SalesTeam>, CrmError>;

    /// Look up a tag by exact name.
    async fn find_tag(&self, name: &str) -> Result<Option<Tag>, CrmError>;

    /// Insert a tag with the given name.
    async fn insert_tag(&self, name: &str) -> Result<Tag, CrmError>;

    /// Look up an attribution record by kind and case-insensitive
    /// exact name.
    async fn find_utm(&self, kind: UtmKind, name: &str) -> Result<Option<UtmRecord>, CrmError>;

    /// Insert an attribution record, keeping the submitted spelling.
    async fn insert_utm(&self, kind: UtmKind, name: &str) -> Result<UtmRecord, CrmError>;

    /// Create an opportunity record.
    async fn insert_lead(&self, lead: NewLead) -> Result<Lead, CrmError>;
}
