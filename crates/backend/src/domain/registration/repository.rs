use chrono::Utc;
use contracts::registration::Registration;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, QueryOrder, Set, SqlErr};

use super::error::RegistrationError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub wallet_address: String,
    pub event_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Registration {
    fn from(m: Model) -> Self {
        Registration {
            id: m.id,
            wallet_address: m.wallet_address,
            event_name: m.event_name,
            created_at: m.created_at,
        }
    }
}

/// Insert a new registration row.
///
/// The UNIQUE (wallet_address, event_name) index decides the winner under
/// concurrent duplicate submissions; there is no check-then-write window.
pub async fn insert(
    conn: &DatabaseConnection,
    wallet_address: &str,
    event_name: &str,
) -> Result<Registration, RegistrationError> {
    let active = ActiveModel {
        id: ActiveValue::NotSet,
        wallet_address: Set(wallet_address.to_string()),
        event_name: Set(event_name.to_string()),
        created_at: Set(Utc::now()),
    };
    match active.insert(conn).await {
        Ok(model) => Ok(model.into()),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(RegistrationError::Duplicate),
            _ => Err(err.into()),
        },
    }
}

/// All registrations in insertion order.
pub async fn list_all(
    conn: &DatabaseConnection,
) -> Result<Vec<Registration>, RegistrationError> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
