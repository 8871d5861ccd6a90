use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::registration::ErrorResponse;
use sea_orm::DbErr;
use thiserror::Error;

/// Typed outcome of the registration store and service.
///
/// Storage-engine specifics stay behind this boundary: handlers only see
/// these variants, never a database error code.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("wallet address and event name are required")]
    MissingField,

    #[error("registration already exists for this wallet and event")]
    Duplicate,

    #[error(transparent)]
    Database(#[from] DbErr),
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RegistrationError::MissingField => (
                StatusCode::BAD_REQUEST,
                "Wallet address and event name are required.",
            ),
            RegistrationError::Duplicate => (
                StatusCode::CONFLICT,
                "Registration already exists for this wallet and event.",
            ),
            RegistrationError::Database(err) => {
                // Full cause goes to the log, never to the caller.
                tracing::error!("registration store failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.",
                )
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
