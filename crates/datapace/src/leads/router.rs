use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{service_display_name, ContactDraft, InquiryDraft, SubscriptionDraft};
use super::repository::{LeadRepository, RepositoryError};
use super::service::{LeadIntakeError, LeadIntakeService, SubscriptionOutcome, INQUIRY_NEXT_STEPS};

/// Router builder exposing the lead-capture endpoints.
pub fn lead_router<R>(service: Arc<LeadIntakeService<R>>) -> Router
where
    R: LeadRepository + 'static,
{
    Router::new()
        .route("/api/v1/service-inquiries", post(inquiry_handler::<R>))
        .route("/api/v1/contact", post(contact_handler::<R>))
        .route("/api/v1/newsletter", post(newsletter_handler::<R>))
        .with_state(service)
}

pub(crate) async fn inquiry_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    axum::Json(draft): axum::Json<InquiryDraft>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.submit_inquiry(draft) {
        Ok(record) => {
            let payload = json!({
                "success": true,
                "message": format!(
                    "Your inquiry for our {} service has been received",
                    service_display_name(&record.service_type)
                ),
                "inquiryId": record.id.0,
                "nextSteps": INQUIRY_NEXT_STEPS,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn contact_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    axum::Json(draft): axum::Json<ContactDraft>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.submit_contact(draft) {
        Ok(record) => {
            let payload = json!({
                "success": true,
                "message": "Thanks for reaching out. We'll get back to you shortly.",
                "submissionId": record.id.0,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn newsletter_handler<R>(
    State(service): State<Arc<LeadIntakeService<R>>>,
    axum::Json(draft): axum::Json<SubscriptionDraft>,
) -> Response
where
    R: LeadRepository + 'static,
{
    match service.subscribe(draft) {
        Ok(SubscriptionOutcome::Subscribed(record)) => {
            let payload = json!({
                "success": true,
                "message": "You're subscribed. Watch your inbox for our next issue.",
                "subscriberId": record.id.0,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(SubscriptionOutcome::AlreadySubscribed) => {
            let payload = json!({
                "success": true,
                "alreadySubscribed": true,
                "message": "This email is already subscribed to our newsletter.",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => intake_error_response(error),
    }
}

fn intake_error_response(error: LeadIntakeError) -> Response {
    match error {
        LeadIntakeError::MissingField(_) | LeadIntakeError::InvalidEmail => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        LeadIntakeError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "record already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        LeadIntakeError::Repository(other) => {
            tracing::error!(error = %other, "lead intake persistence failure");
            let payload = json!({ "error": "temporarily unable to save your request, please retry" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
