//! Testing utilities
//!
//! Shared by unit tests and the integration tests under `tests/`:
//! - [`RecordingMailer`] / [`FailingMailer`] - doubles for the email seam
//! - [`memory_state`] - application state wired to in-memory backends
//!
//! # Example
//!
//! ```rust
//! use mv_landing::email::{Email, EmailSender};
//! use mv_landing::testing::memory_state;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (state, store, mailer) = memory_state();
//!
//! let email = Email::new()
//!     .to("sales@example.com")
//!     .from("web@example.com")
//!     .subject("New inquiry")
//!     .text("body");
//! state.mailer().send(email).await?;
//!
//! assert_eq!(mailer.sent_count(), 1);
//! assert!(store.leads().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod email;

pub use email::{FailingMailer, RecordingMailer};

use std::sync::Arc;

use crate::config::LandingConfig;
use crate::crm::InMemoryCrmStore;
use crate::state::AppState;

/// Application state wired to in-memory backends.
///
/// Returns the backend handles alongside the state so tests can seed
/// and inspect them.
#[must_use]
pub fn memory_state() -> (AppState, Arc<InMemoryCrmStore>, Arc<RecordingMailer>) {
    let store = Arc::new(InMemoryCrmStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    let state = AppState::with_parts(LandingConfig::default(), store.clone(), mailer.clone());
    (state, store, mailer)
}
