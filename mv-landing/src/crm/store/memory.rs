//! In-memory CRM store
//!
//! Backs development mode and tests, the storage counterpart of the
//! console email backend. Records live in process memory and are lost
//! on restart.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use super::{CrmError, CrmStore};
use crate::crm::{Lead, NewLead, SalesTeam, Tag, UtmKind, UtmRecord};

/// In-memory CRM store for development and tests
///
/// # Examples
///
/// ```rust
/// use mv_landing::crm::{CrmStore, InMemoryCrmStore};
///
/// # async fn example() -> Result<(), mv_landing::crm::CrmError> {
/// let store = InMemoryCrmStore::new();
/// store.seed_team("Sales", None);
///
/// let team = store.default_team().await?;
/// assert_eq!(team.unwrap().name, "Sales");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCrmStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    teams: Vec<SalesTeam>,
    tags: Vec<Tag>,
    utm: Vec<UtmRecord>,
    leads: Vec<Lead>,
}

impl InMemoryCrmStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sales team to the directory.
    ///
    /// The directory is pre-existing data in production; tests seed it
    /// explicitly.
    pub fn seed_team(&self, name: impl Into<String>, user_id: Option<Uuid>) -> SalesTeam {
        let team = SalesTeam {
            id: Uuid::new_v4(),
            name: name.into(),
            user_id,
        };
        self.inner.lock().teams.push(team.clone());
        team
    }

    /// Snapshot of all stored leads
    #[must_use]
    pub fn leads(&self) -> Vec<Lead> {
        self.inner.lock().leads.clone()
    }

    /// Snapshot of all stored tags
    #[must_use]
    pub fn tags(&self) -> Vec<Tag> {
        self.inner.lock().tags.clone()
    }

    /// Snapshot of all stored attribution records
    #[must_use]
    pub fn utm_records(&self) -> Vec<UtmRecord> {
        self.inner.lock().utm.clone()
    }
}

#[async_trait]
impl CrmStore for InMemoryCrmStore {
    async fn default_team(&self) -> Result<Option<SalesTeam>, CrmError> {
        Ok(self.inner.lock().teams.first().cloned())
    }

    async fn find_tag(&self, name: &str) -> Result<Option<Tag>, CrmError> {
        Ok(self
            .inner
            .lock()
            .tags
            .iter()
            .find(|tag| tag.name == name)
            .cloned())
    }

    async fn insert_tag(&self, name: &str) -> Result<Tag, CrmError> {
        let tag = Tag {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.inner.lock().tags.push(tag.clone());
        Ok(tag)
    }

    async fn find_utm(&self, kind: UtmKind, name: &str) -> Result<Option<UtmRecord>, CrmError> {
        let needle = name.to_lowercase();
        Ok(self
            .inner
            .lock()
            .utm
            .iter()
            .find(|record| record.kind == kind && record.name.to_lowercase() == needle)
            .cloned())
    }

    async fn insert_utm(&self, kind: UtmKind, name: &str) -> Result<UtmRecord, CrmError> {
        let record = UtmRecord {
            id: Uuid::new_v4(),
            kind,
            name: name.to_string(),
        };
        self.inner.lock().utm.push(record.clone());
        Ok(record)
    }

    async fn insert_lead(&self, lead: NewLead) -> Result<Lead, CrmError> {
        let stored = Lead::from_new(Uuid::new_v4(), Utc::now(), lead);
        self.inner.lock().leads.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_team_is_first_seeded() {
        let store = InMemoryCrmStore::new();
        assert!(store.default_team().await.unwrap().is_none());

        let first = store.seed_team("Prodej", None);
        store.seed_team("Druhý tým", None);

        let team = store.default_team().await.unwrap().unwrap();
        assert_eq!(team.id, first.id);
    }

    #[tokio::test]
    async fn tag_lookup_is_exact() {
        let store = InMemoryCrmStore::new();
        store.insert_tag("Landing Page").await.unwrap();

        assert!(store.find_tag("Landing Page").await.unwrap().is_some());
        assert!(store.find_tag("landing page").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn utm_lookup_ignores_case_within_kind() {
        let store = InMemoryCrmStore::new();
        store.insert_utm(UtmKind::Source, "Google").await.unwrap();

        let found = store.find_utm(UtmKind::Source, "gOOgle").await.unwrap();
        assert_eq!(found.unwrap().name, "Google");

        // Same name under a different kind is a different record
        assert!(store
            .find_utm(UtmKind::Medium, "google")
            .await
            .unwrap()
            .is_none());
    }
}
