use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::registration::{RegisterRequest, Registration};

use crate::domain::registration::error::RegistrationError;
use crate::domain::registration::service;
use crate::routes::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Registration>), RegistrationError> {
    let created = service::register(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /registrations
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<Registration>>, RegistrationError> {
    let items = service::list_all(&state.db).await?;
    Ok(Json(items))
}
