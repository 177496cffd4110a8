//! Find-or-create resolution for tags and attribution records
//!
//! No uniqueness lock is taken anywhere in this module: two concurrent
//! submissions carrying the same new value can both miss the lookup
//! and insert duplicate records. Sequential submissions always reuse
//! the first record.

use crate::forms::ContactForm;

use super::{CrmError, CrmStore, Tag, UtmKind, UtmRecord};

/// Look up a tag by exact name, creating it when absent.
pub async fn find_or_create_tag(store: &dyn CrmStore, name: &str) -> Result<Tag, CrmError> {
    if let Some(tag) = store.find_tag(name).await? {
        return Ok(tag);
    }
    tracing::debug!(name, "Creating tag");
    store.insert_tag(name).await
}

/// Look up an attribution record by case-insensitive exact name,
/// creating it with the submitted spelling when absent.
pub async fn find_or_create_utm(
    store: &dyn CrmStore,
    kind: UtmKind,
    name: &str,
) -> Result<UtmRecord, CrmError> {
    if let Some(record) = store.find_utm(kind, name).await? {
        return Ok(record);
    }
    tracing::debug!(%kind, name, "Creating attribution record");
    store.insert_utm(kind, name).await
}

/// Resolved attribution records for one submission
#[derive(Debug, Clone, Default)]
pub struct UtmLinks {
    /// Traffic source record
    pub source: Option<UtmRecord>,
    /// Traffic medium record
    pub medium: Option<UtmRecord>,
    /// Campaign record
    pub campaign: Option<UtmRecord>,
}

/// Resolve the record-backed attribution fields of a submission.
///
/// Empty fields resolve to `None`; term and content are never
/// record-backed and are carried in the lead description instead.
pub async fn resolve_utm_links(
    store: &dyn CrmStore,
    form: &ContactForm,
) -> Result<UtmLinks, CrmError> {
    let mut links = UtmLinks::default();

    for (kind, value, slot) in [
        (UtmKind::Source, &form.utm_source, &mut links.source),
        (UtmKind::Medium, &form.utm_medium, &mut links.medium),
        (UtmKind::Campaign, &form.utm_campaign, &mut links.campaign),
    ] {
        if !value.is_empty() {
            *slot = Some(find_or_create_utm(store, kind, value).await?);
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::store::MockCrmStore;
    use crate::crm::InMemoryCrmStore;
    use uuid::Uuid;

    #[tokio::test]
    async fn sequential_resolution_reuses_record() {
        let store = InMemoryCrmStore::new();

        let first = find_or_create_utm(&store, UtmKind::Source, "Google")
            .await
            .unwrap();
        let second = find_or_create_utm(&store, UtmKind::Source, "google")
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Google");
        assert_eq!(store.utm_records().len(), 1);
    }

    #[tokio::test]
    async fn existing_tag_is_not_recreated() {
        let mut store = MockCrmStore::new();
        let tag = Tag {
            id: Uuid::new_v4(),
            name: "Landing Page".to_string(),
        };
        let found = tag.clone();
        store
            .expect_find_tag()
            .withf(|name| name == "Landing Page")
            .return_once(move |_| Ok(Some(found)));
        store.expect_insert_tag().never();

        let resolved = find_or_create_tag(&store, "Landing Page").await.unwrap();
        assert_eq!(resolved, tag);
    }

    #[tokio::test]
    async fn missing_tag_is_created() {
        let store = InMemoryCrmStore::new();

        let tag = find_or_create_tag(&store, "Landing Page").await.unwrap();
        assert_eq!(tag.name, "Landing Page");
        assert_eq!(store.tags().len(), 1);
    }

    #[tokio::test]
    async fn empty_utm_fields_resolve_to_none() {
        let store = InMemoryCrmStore::new();
        let form = ContactForm {
            utm_source: "google".to_string(),
            ..ContactForm::default()
        };

        let links = resolve_utm_links(&store, &form).await.unwrap();

        assert_eq!(links.source.unwrap().name, "google");
        assert!(links.medium.is_none());
        assert!(links.campaign.is_none());
        assert_eq!(store.utm_records().len(), 1);
    }
}
