use contracts::registration::{ErrorResponse, RegisterRequest, Registration};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Outcome of a register call, with the duplicate case kept separate so the
/// UI can show a dedicated message for it.
#[derive(Debug, Clone)]
pub enum RegisterError {
    AlreadyRegistered,
    Failed(String),
}

/// Fetch all registrations
pub async fn fetch_registrations() -> Result<Vec<Registration>, String> {
    let response = Request::get(&format!("{}/registrations", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch registrations: {}", response.status()));
    }

    response
        .json::<Vec<Registration>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a wallet for an event
pub async fn register(
    wallet_address: &str,
    event_name: &str,
) -> Result<Registration, RegisterError> {
    let req = RegisterRequest {
        wallet_address: wallet_address.to_string(),
        event_name: event_name.to_string(),
    };

    let response = Request::post(&format!("{}/register", api_base()))
        .json(&req)
        .map_err(|e| RegisterError::Failed(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| RegisterError::Failed(format!("Failed to send request: {}", e)))?;

    if response.status() == 409 {
        return Err(RegisterError::AlreadyRegistered);
    }
    if !response.ok() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(RegisterError::Failed(message));
    }

    response
        .json::<Registration>()
        .await
        .map_err(|e| RegisterError::Failed(format!("Failed to parse response: {}", e)))
}
