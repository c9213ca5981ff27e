use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::entitlement::GuildEntitlementRepository, model::premium::PremiumTier,
    service::import::store::PremiumLookup,
};

/// Derives a guild's tier from its active entitlements.
pub struct EntitlementPremiumLookup {
    db: DatabaseConnection,
}

impl EntitlementPremiumLookup {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PremiumLookup for EntitlementPremiumLookup {
    /// Returns the highest tier among unexpired entitlements, ignoring unknown tier names.
    async fn get_tier(&self, guild_id: u64) -> Result<PremiumTier, DbErr> {
        let tiers = GuildEntitlementRepository::new(&self.db)
            .get_active_tiers(guild_id, Utc::now())
            .await?;

        let tier = tiers
            .iter()
            .filter_map(|tier| match tier.parse::<PremiumTier>() {
                Ok(tier) => Some(tier),
                Err(e) => {
                    tracing::warn!("Ignoring entitlement of guild {}: {}", guild_id, e);
                    None
                }
            })
            .max()
            .unwrap_or_default();

        Ok(tier)
    }
}

/// Reports the same tier for every guild.
pub struct StaticPremiumLookup(pub PremiumTier);

#[async_trait]
impl PremiumLookup for StaticPremiumLookup {
    async fn get_tier(&self, _guild_id: u64) -> Result<PremiumTier, DbErr> {
        Ok(self.0)
    }
}
