//! Application state shared across handlers
//!
//! Bundles the loaded configuration with the two backend seams (CRM
//! store, mail sender) behind cheaply clonable `Arc`s.

use std::sync::Arc;

use crate::{
    config::LandingConfig,
    crm::{CrmStore, InMemoryCrmStore, PgCrmStore},
    email::{backend::SmtpConfig, ConsoleBackend, EmailSender, SmtpBackend},
    error::LandingError,
};

/// Shared application state
///
/// # Example
///
/// ```rust,no_run
/// use mv_landing::{config::LandingConfig, handlers, state::AppState};
///
/// # async fn example() -> anyhow::Result<()> {
/// let state = AppState::from_config(LandingConfig::load()?).await?;
/// let app = handlers::router(state);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    config: Arc<LandingConfig>,

    /// CRM record storage
    crm: Arc<dyn CrmStore>,

    /// Outbound mail transport
    mailer: Arc<dyn EmailSender>,
}

impl AppState {
    /// Assemble state from configuration.
    ///
    /// Selects Postgres storage when `[database] url` is set and the
    /// SMTP backend when `[smtp] host` is set; otherwise falls back to
    /// the in-memory store and the console mailer (development mode).
    pub async fn from_config(config: LandingConfig) -> Result<Self, LandingError> {
        let crm: Arc<dyn CrmStore> = match &config.database.url {
            Some(url) => {
                tracing::info!("Connecting to Postgres CRM store");
                Arc::new(PgCrmStore::connect(url).await?)
            }
            None => {
                tracing::warn!("No database configured, CRM records are kept in memory");
                Arc::new(InMemoryCrmStore::new())
            }
        };

        let mailer: Arc<dyn EmailSender> = match SmtpConfig::from_settings(&config.smtp) {
            Some(smtp) => Arc::new(SmtpBackend::new(smtp)),
            None => {
                tracing::warn!("No SMTP host configured, notification emails go to the console");
                Arc::new(ConsoleBackend::new())
            }
        };

        Ok(Self::with_parts(config, crm, mailer))
    }

    /// Assemble state from explicit backend instances.
    ///
    /// Used by tests to wire in-memory and recording backends; see
    /// [`crate::testing::memory_state`].
    #[must_use]
    pub fn with_parts(
        config: LandingConfig,
        crm: Arc<dyn CrmStore>,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            crm,
            mailer,
        }
    }

    /// Get configuration reference
    #[must_use]
    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    /// Get the CRM store
    #[must_use]
    pub fn crm(&self) -> &dyn CrmStore {
        self.crm.as_ref()
    }

    /// Get the mail sender
    #[must_use]
    pub fn mailer(&self) -> &dyn EmailSender {
        self.mailer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn from_config_without_backends_uses_development_pair() {
        let state = AppState::from_config(LandingConfig::default())
            .await
            .expect("Failed to create state");
        assert_eq!(state.config().service.name, "mv-landing");
        // The in-memory store starts empty
        assert!(state.crm().default_team().await.unwrap().is_none());
    }

    #[test]
    fn clone_shares_config() {
        let state = AppState::with_parts(
            LandingConfig::default(),
            Arc::new(InMemoryCrmStore::new()),
            Arc::new(ConsoleBackend::new()),
        );
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
