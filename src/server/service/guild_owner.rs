use std::sync::Arc;

use async_trait::async_trait;
use serenity::{all::GuildId, http::Http};

use crate::server::{error::import::ImportError, service::import::store::GuildOwnerLookup};

/// Resolves guild owners through the Discord REST API.
pub struct DiscordGuildOwnerLookup {
    http: Arc<Http>,
}

impl DiscordGuildOwnerLookup {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GuildOwnerLookup for DiscordGuildOwnerLookup {
    async fn get_owner_id(&self, guild_id: u64) -> Result<u64, ImportError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;

        Ok(guild.owner_id.get())
    }
}
