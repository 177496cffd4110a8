//! HTTP surface: router assembly and request handlers

pub mod contact;

pub use contact::{submit_contact, SubmissionResponse};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{health, state::AppState};

/// Fixed submission path posted by the landing-page script
pub const CONTACT_PATH: &str = "/mv-landing/contact";

/// Submissions are small; anything bigger than this is not a form
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the service router.
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
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(contact::submit_contact))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
