use contracts::registration::{RegisterRequest, Registration};
use sea_orm::DatabaseConnection;

use super::error::RegistrationError;
use super::repository;

/// Register a wallet for an event.
///
/// Validation happens before any store call; the store enforces the
/// one-registration-per-pair invariant.
pub async fn register(
    conn: &DatabaseConnection,
    req: RegisterRequest,
) -> Result<Registration, RegistrationError> {
    let (wallet_address, event_name) = validate(&req)?;
    repository::insert(conn, &wallet_address, &event_name).await
}

pub async fn list_all(
    conn: &DatabaseConnection,
) -> Result<Vec<Registration>, RegistrationError> {
    repository::list_all(conn).await
}

fn validate(req: &RegisterRequest) -> Result<(String, String), RegistrationError> {
    let wallet_address = req.wallet_address.trim();
    let event_name = req.event_name.trim();
    if wallet_address.is_empty() || event_name.is_empty() {
        return Err(RegistrationError::MissingField);
    }
    Ok((wallet_address.to_string(), event_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(wallet: &str, event: &str) -> RegisterRequest {
        RegisterRequest {
            wallet_address: wallet.to_string(),
            event_name: event.to_string(),
        }
    }

    #[test]
    fn accepts_and_trims_valid_input() {
        let (wallet, event) = validate(&req("  0xabc  ", " Web3 Conf ")).unwrap();
        assert_eq!(wallet, "0xabc");
        assert_eq!(event, "Web3 Conf");
    }

    #[test]
    fn rejects_missing_wallet_address() {
        let err = validate(&req("", "Web3 Conf")).unwrap_err();
        assert!(matches!(err, RegistrationError::MissingField));
    }

    #[test]
    fn rejects_whitespace_only_event_name() {
        let err = validate(&req("0xabc", "   ")).unwrap_err();
        assert!(matches!(err, RegistrationError::MissingField));
    }
}
