//! mv-landing: landing-page contact intake with CRM lead capture
//!
//! This service receives contact form submissions from the Michal Varys
//! marketing landing page, validates them server-side, stores each valid
//! submission as a CRM opportunity enriched with campaign-attribution
//! (UTM) records and a classification tag, and forwards a best-effort
//! HTML notification email to the sales mailbox.
//!
//! # Request Flow
//!
//! 1. `POST /mv-landing/contact` with form-encoded fields
//! 2. Trim + validate (name, email, interest); violations are joined
//!    into a single message and returned with HTTP 400
//! 3. Resolve the default sales team, UTM records (find-or-create) and
//!    the `"Landing Page"` tag (find-or-create)
//! 4. Create exactly one opportunity record
//! 5. Send the notification email; send failures are logged and never
//!    affect the submitter-visible outcome
//! 6. Respond with JSON `{success, message}`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mv_landing::{config::LandingConfig, handlers, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mv_landing::observability::init()?;
//!
//!     let config = LandingConfig::load()?;
//!     let bind = config.service.bind.clone();
//!
//!     let state = AppState::from_config(config).await?;
//!     let app = handlers::router(state);
//!
//!     let listener = tokio::net::TcpListener::bind(&bind).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Backends
//!
//! Storage and mail are trait seams with two implementations each:
//! Postgres ([`crm::PgCrmStore`]) and SMTP ([`email::SmtpBackend`]) in
//! production, an in-memory store ([`crm::InMemoryCrmStore`]) and a
//! console mailer ([`email::ConsoleBackend`]) for development. The
//! backend pair is chosen from configuration at startup.

#![allow(clippy::missing_errors_doc)] // TODO: Add comprehensive error docs before 1.0

pub mod config;
pub mod crm;
pub mod email;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod health;
pub mod observability;
pub mod state;

// Test doubles shared by unit and integration tests
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use mv_landing::prelude::*;
    //! ```

    // Form handling
    pub use crate::forms::{interest_label, validation_message, ContactForm};

    // CRM domain
    pub use crate::crm::{
        CrmError, CrmStore, InMemoryCrmStore, Lead, LeadKind, NewLead, PgCrmStore, SalesTeam,
        Tag, UtmKind, UtmRecord, LANDING_TAG,
    };

    // Email system
    pub use crate::email::{ConsoleBackend, Email, EmailError, EmailSender, SmtpBackend};

    // HTTP surface
    pub use crate::handlers::{router, SubmissionResponse, CONTACT_PATH};

    // Application state and configuration
    pub use crate::config::LandingConfig;
    pub use crate::state::AppState;

    // Error types
    pub use crate::error::LandingError;

    // Re-export key dependencies
    pub use axum;
    pub use validator;

    // Convenience for JSON responses
    pub use serde_json::json;
}
