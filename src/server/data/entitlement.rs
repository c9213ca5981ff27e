use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct GuildEntitlementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildEntitlementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the tier names of a guild's entitlements that have not expired at `now`.
    pub async fn get_active_tiers(
        &self,
        guild_id: u64,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::GuildEntitlement::find()
            .select_only()
            .column(entity::guild_entitlement::Column::Tier)
            .filter(entity::guild_entitlement::Column::GuildId.eq(guild_id as i64))
            .filter(
                Condition::any()
                    .add(entity::guild_entitlement::Column::ExpiresAt.is_null())
                    .add(entity::guild_entitlement::Column::ExpiresAt.gt(now)),
            )
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
