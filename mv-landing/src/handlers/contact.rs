//! Contact form submission handler
//!
//! The one substantial endpoint of the service: validate, resolve
//! references, create the opportunity, notify, respond. Validation
//! failures short-circuit before any record is touched; notification
//! failures never reach the submitter.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::crm::{assemble, resolve, CrmError, Lead, LANDING_TAG};
use crate::email::notify;
use crate::forms::{validation_message, ContactForm};
use crate::state::AppState;

/// Message shown after a stored submission
pub const SUBMISSION_OK: &str = "Děkujeme! Ozvu se vám do 24 hodin.";

/// Generic message for unexpected processing failures
pub const SUBMISSION_FAILED: &str = "Omlouváme se, došlo k chybě. Zkuste to prosím znovu.";

/// JSON payload returned to the page script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    /// Whether the submission was stored
    pub success: bool,
    /// Localized message for the visitor
    pub message: String,
}

impl SubmissionResponse {
    /// Successful-submission payload
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            message: SUBMISSION_OK.to_string(),
        }
    }

    /// Failure payload with the given message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `POST /mv-landing/contact` - store a submission as a CRM opportunity
///
/// Responds 400 with the joined rule violations, 500 with a generic
/// message on processing failure, 200 otherwise.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    let form = form.trimmed();

    if let Err(errors) = form.validate() {
        let message = validation_message(&errors);
        tracing::debug!(%message, "Rejected contact submission");
        return (
            StatusCode::BAD_REQUEST,
            Json(SubmissionResponse::failure(message)),
        )
            .into_response();
    }

    match store_submission(&state, &form).await {
        Ok(lead) => {
            tracing::info!(
                lead_id = %lead.id,
                contact = %form.name,
                email = %form.email,
                "CRM opportunity created"
            );

            notify::send_submission_notice(state.mailer(), &form, &lead, state.config()).await;

            (StatusCode::OK, Json(SubmissionResponse::ok())).into_response()
        }
        Err(error) => {
            tracing::error!(%error, email = %form.email, "Contact form processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmissionResponse::failure(SUBMISSION_FAILED)),
            )
                .into_response()
        }
    }
}

/// Resolve references and create the opportunity record.
async fn store_submission(state: &AppState, form: &ContactForm) -> Result<Lead, CrmError> {
    let store = state.crm();

    let team = store.default_team().await?;
    let utm = resolve::resolve_utm_links(store, form).await?;
    let tag = resolve::find_or_create_tag(store, LANDING_TAG).await?;

    let payload = assemble::lead_payload(form, team.as_ref(), &tag, &utm);
    store.insert_lead(payload).await
}
