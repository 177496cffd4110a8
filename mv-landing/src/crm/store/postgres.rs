//! Postgres-backed CRM store
//!
//! Runtime-checked queries over a connection pool; the schema ships as
//! embedded migrations run at connect time.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use uuid::Uuid;

use super::{CrmError, CrmStore};
use crate::crm::{Lead, NewLead, SalesTeam, Tag, UtmKind, UtmRecord};

/// Postgres-backed CRM store
pub struct PgCrmStore {
    pool: PgPool,
}

impl PgCrmStore {
    /// Connect to the database and run pending migrations.
    pub async fn connect(url: &str) -> Result<Self, CrmError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool; migrations are the caller's concern.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CrmStore for PgCrmStore {
    async fn default_team(&self) -> Result<Option<SalesTeam>, CrmError> {
        let row = sqlx::query(
            "SELECT id, name, user_id FROM crm_team ORDER BY created_at, id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| SalesTeam {
            id: row.get("id"),
            name: row.get("name"),
            user_id: row.get("user_id"),
        }))
    }

    async fn find_tag(&self, name: &str) -> Result<Option<Tag>, CrmError> {
        let row = sqlx::query("SELECT id, name FROM crm_tag WHERE name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Tag {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    async fn insert_tag(&self, name: &str) -> Result<Tag, CrmError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO crm_tag (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Tag {
            id,
            name: name.to_string(),
        })
    }

    async fn find_utm(&self, kind: UtmKind, name: &str) -> Result<Option<UtmRecord>, CrmError> {
        let row = sqlx::query(
            "SELECT id, name FROM utm_record \
             WHERE kind = $1 AND lower(name) = lower($2) LIMIT 1",
        )
        .bind(kind.as_str())
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| UtmRecord {
            id: row.get("id"),
            kind,
            name: row.get("name"),
        }))
    }

    async fn insert_utm(&self, kind: UtmKind, name: &str) -> Result<UtmRecord, CrmError> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO utm_record (id, kind, name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(kind.as_str())
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(UtmRecord {
            id,
            kind,
            name: name.to_string(),
        })
    }

    async fn insert_lead(&self, lead: NewLead) -> Result<Lead, CrmError> {
        let stored = Lead::from_new(Uuid::new_v4(), Utc::now(), lead);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO crm_lead \
             (id, name, contact_name, email_from, phone, partner_name, description, \
              kind, team_id, user_id, source_id, medium_id, campaign_id, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(stored.id)
        .bind(&stored.name)
        .bind(&stored.contact_name)
        .bind(&stored.email_from)
        .bind(&stored.phone)
        .bind(&stored.partner_name)
        .bind(&stored.description)
        .bind(stored.kind.as_str())
        .bind(stored.team_id)
        .bind(stored.user_id)
        .bind(stored.source_id)
        .bind(stored.medium_id)
        .bind(stored.campaign_id)
        .bind(stored.created_at)
        .execute(&mut *tx)
        .await?;

        for tag_id in &stored.tag_ids {
            sqlx::query("INSERT INTO crm_lead_tag (lead_id, tag_id) VALUES ($1, $2)")
                .bind(stored.id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(stored)
    }
}
