//! # Contact API
//!
//! Accepts contact-form submissions and hands them to the dispatcher. Each
//! failure class maps to its own status code so the form can tell a
//! retryable notice from a dead configuration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use portfolio_core::contact::{ContactError, ContactMessage};

use crate::SharedState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    /// Whether resubmitting the same fields can succeed
    pub retryable: bool,
}

pub fn contact_routes() -> Router<SharedState> {
    Router::new().route("/", post(send_contact))
}

/// Send a contact message through the delivery collaborator
#[utoipa::path(
    post,
    path = "/api/v1/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message delivered", body = ContactResponse),
        (status = 409, description = "A send is already in flight", body = ContactResponse),
        (status = 422, description = "A field failed validation", body = ContactResponse),
        (status = 502, description = "Delivery collaborator failed", body = ContactResponse),
        (status = 503, description = "Delivery credentials missing", body = ContactResponse)
    )
)]
pub async fn send_contact(
    State(state): State<SharedState>,
    Json(req): Json<ContactRequest>,
) -> (StatusCode, Json<ContactResponse>) {
    let message = ContactMessage::new(req.name, req.email, req.message);

    match state.dispatcher.dispatch(&message).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ContactResponse {
                success: true,
                message: "Message sent! Thanks for reaching out.".to_string(),
                retryable: false,
            }),
        ),
        Err(e) => {
            let status = match &e {
                ContactError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
                ContactError::InvalidField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ContactError::SendInProgress => StatusCode::CONFLICT,
                ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
            };
            (
                status,
                Json(ContactResponse {
                    success: false,
                    retryable: e.is_retryable(),
                    message: e.to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_state;

    #[tokio::test]
    async fn test_unconfigured_dispatcher_maps_to_503() {
        let state = test_state();
        let (status, body) = send_contact(
            State(state),
            Json(ContactRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!body.0.success);
        assert!(!body.0.retryable);
    }

    #[tokio::test]
    async fn test_blank_field_maps_to_422() {
        let state = crate::test_state_with_contact();
        let (status, body) = send_contact(
            State(state),
            Json(ContactRequest {
                name: String::new(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!body.0.success);
    }
}
