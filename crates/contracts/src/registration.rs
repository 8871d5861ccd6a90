use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A durable record linking a wallet address to an event name.
///
/// Created once via `POST /register`, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Assigned by the store on insert.
    pub id: i64,

    /// Blockchain account of the registrant, treated as an opaque string.
    pub wallet_address: String,

    pub event_name: String,

    /// Set on insert, immutable afterwards.
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /register`.
///
/// Fields default to empty strings so a missing field surfaces as a
/// validation error (HTTP 400) instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub wallet_address: String,

    #[serde(default)]
    pub event_name: String,
}

/// Error body returned by the API for 400/409/500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
