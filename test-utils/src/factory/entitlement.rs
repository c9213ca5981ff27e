//! Premium entitlement factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants `tier` to the guild until `expires_at`, or forever when `None`.
pub async fn create_entitlement(
    db: &DatabaseConnection,
    guild_id: i64,
    tier: &str,
    expires_at: Option<DateTime<Utc>>,
) -> Result<entity::guild_entitlement::Model, DbErr> {
    entity::guild_entitlement::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        tier: ActiveValue::Set(tier.to_string()),
        expires_at: ActiveValue::Set(expires_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
