//! Guild settings repository.
//!
//! Every guild has at most one `guild_setting` row. Each setter upserts that row and only
//! overwrites its own column, so settings imported concurrently do not clobber each other.
//! Structured settings are stored as JSON documents.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use serde::Serialize;

use crate::server::model::guild_data::{
    AutoCloseSettings, ClaimSettings, GuildMetadata, NamingScheme, Settings, TicketPermissions,
};

use entity::guild_setting::{ActiveModel, Column};

pub struct GuildSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings row of a guild, if any setting was ever stored.
    pub async fn get(&self, guild_id: u64) -> Result<Option<entity::guild_setting::Model>, DbErr> {
        entity::prelude::GuildSetting::find_by_id(guild_id as i64)
            .one(self.db)
            .await
    }

    pub async fn set_language(&self, guild_id: u64, language: &str) -> Result<(), DbErr> {
        let model = ActiveModel {
            language: ActiveValue::Set(Some(language.to_string())),
            ..row(guild_id)
        };

        self.upsert(model, Column::Language).await
    }

    pub async fn set_archive_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            archive_channel: ActiveValue::Set(channel_id.map(|id| id as i64)),
            ..row(guild_id)
        };

        self.upsert(model, Column::ArchiveChannel).await
    }

    pub async fn set_channel_category(&self, guild_id: u64, category_id: u64) -> Result<(), DbErr> {
        let model = ActiveModel {
            channel_category: ActiveValue::Set(Some(category_id as i64)),
            ..row(guild_id)
        };

        self.upsert(model, Column::ChannelCategory).await
    }

    pub async fn set_close_confirmation(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        let model = ActiveModel {
            close_confirmation: ActiveValue::Set(Some(enabled)),
            ..row(guild_id)
        };

        self.upsert(model, Column::CloseConfirmation).await
    }

    pub async fn set_feedback_enabled(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        let model = ActiveModel {
            feedback_enabled: ActiveValue::Set(Some(enabled)),
            ..row(guild_id)
        };

        self.upsert(model, Column::FeedbackEnabled).await
    }

    pub async fn set_users_can_close(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        let model = ActiveModel {
            users_can_close: ActiveValue::Set(Some(enabled)),
            ..row(guild_id)
        };

        self.upsert(model, Column::UsersCanClose).await
    }

    pub async fn set_ticket_limit(&self, guild_id: u64, limit: u8) -> Result<(), DbErr> {
        let model = ActiveModel {
            ticket_limit: ActiveValue::Set(Some(limit as i16)),
            ..row(guild_id)
        };

        self.upsert(model, Column::TicketLimit).await
    }

    pub async fn set_welcome_message(&self, guild_id: u64, message: &str) -> Result<(), DbErr> {
        let model = ActiveModel {
            welcome_message: ActiveValue::Set(Some(message.to_string())),
            ..row(guild_id)
        };

        self.upsert(model, Column::WelcomeMessage).await
    }

    pub async fn set_naming_scheme(
        &self,
        guild_id: u64,
        scheme: NamingScheme,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            naming_scheme: ActiveValue::Set(Some(scheme.as_str().to_string())),
            ..row(guild_id)
        };

        self.upsert(model, Column::NamingScheme).await
    }

    pub async fn set_autoclose(
        &self,
        guild_id: u64,
        settings: &AutoCloseSettings,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            autoclose: ActiveValue::Set(Some(to_json(settings)?)),
            ..row(guild_id)
        };

        self.upsert(model, Column::Autoclose).await
    }

    pub async fn set_claim_settings(
        &self,
        guild_id: u64,
        settings: &ClaimSettings,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            claim_settings: ActiveValue::Set(Some(to_json(settings)?)),
            ..row(guild_id)
        };

        self.upsert(model, Column::ClaimSettings).await
    }

    pub async fn set_ticket_permissions(
        &self,
        guild_id: u64,
        permissions: &TicketPermissions,
    ) -> Result<(), DbErr> {
        let model = ActiveModel {
            ticket_permissions: ActiveValue::Set(Some(to_json(permissions)?)),
            ..row(guild_id)
        };

        self.upsert(model, Column::TicketPermissions).await
    }

    pub async fn set_metadata(&self, guild_id: u64, metadata: &GuildMetadata) -> Result<(), DbErr> {
        let model = ActiveModel {
            metadata: ActiveValue::Set(Some(to_json(metadata)?)),
            ..row(guild_id)
        };

        self.upsert(model, Column::Metadata).await
    }

    pub async fn set_settings(&self, guild_id: u64, settings: &Settings) -> Result<(), DbErr> {
        let model = ActiveModel {
            settings: ActiveValue::Set(Some(to_json(settings)?)),
            ..row(guild_id)
        };

        self.upsert(model, Column::Settings).await
    }

    /// Sets one custom colour, replacing the previous value of that colour slot.
    pub async fn set_custom_colour(
        &self,
        guild_id: u64,
        colour_id: i16,
        value: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::CustomColour::insert(entity::custom_colour::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            colour_id: ActiveValue::Set(colour_id),
            value: ActiveValue::Set(value),
        })
        .on_conflict(
            OnConflict::columns([
                entity::custom_colour::Column::GuildId,
                entity::custom_colour::Column::ColourId,
            ])
            .update_column(entity::custom_colour::Column::Value)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Inserts the guild's row or overwrites `column` of the existing one.
    async fn upsert(&self, model: ActiveModel, column: Column) -> Result<(), DbErr> {
        entity::prelude::GuildSetting::insert(model)
            .on_conflict(
                OnConflict::column(Column::GuildId)
                    .update_column(column)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}

fn row(guild_id: u64) -> ActiveModel {
    ActiveModel {
        guild_id: ActiveValue::Set(guild_id as i64),
        ..Default::default()
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, DbErr> {
    serde_json::to_string(value).map_err(|e| DbErr::Custom(format!("Failed to encode JSON: {}", e)))
}
