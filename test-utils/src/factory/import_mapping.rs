//! Identifier mapping factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that `source_id` in `area` was imported as `target_id`.
pub async fn create_mapping(
    db: &DatabaseConnection,
    guild_id: i64,
    area: &str,
    source_id: i32,
    target_id: i32,
) -> Result<entity::import_mapping::Model, DbErr> {
    entity::import_mapping::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        area: ActiveValue::Set(area.to_string()),
        source_id: ActiveValue::Set(source_id),
        target_id: ActiveValue::Set(target_id),
    }
    .insert(db)
    .await
}
