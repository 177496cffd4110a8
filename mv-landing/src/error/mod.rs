//! Error types and error handling

use thiserror::Error;

/// Top-level service error type
#[derive(Debug, Error)]
pub enum LandingError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// CRM storage error
    #[error("CRM storage error: {0}")]
    Crm(#[from] crate::crm::CrmError),

    /// Email error
    #[error("Email error: {0}")]
    Email(#[from] crate::email::EmailError),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}
