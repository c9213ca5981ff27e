//! SeaORM implementations of the import orchestrator's storage seams.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{
        access::GuildAccessRepository, embed::EmbedRepository, form::FormRepository,
        guild_setting::GuildSettingRepository, import_mapping::ImportMappingRepository,
        multi_panel::MultiPanelRepository, panel::PanelRepository,
        support_team::SupportTeamRepository, tag::TagRepository, ticket::TicketRepository,
        ticket_history::TicketHistoryRepository,
    },
    model::{
        guild_data::{
            AutoCloseSettings, ClaimSettings, CustomEmbed, EmbedField, GuildMetadata,
            MultiPanel, NamingScheme, Settings, Tag, TicketPermissions,
        },
        import::{
            AccessControlRuleParams, CloseReasonParams, CreateFormInputParams,
            CreatePanelParams, EntityClass, ExitSurveyResponseParams, ImportTicketParams,
            LastMessageParams,
        },
    },
    service::import::store::{ImportStore, MappingStore, PanelBatch},
};

/// Writes imported records through the repositories.
pub struct SeaOrmImportStore {
    db: DatabaseConnection,
}

impl SeaOrmImportStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Panel transaction; each panel is created in its own savepoint.
pub struct SeaOrmPanelBatch {
    txn: DatabaseTransaction,
}

#[async_trait]
impl PanelBatch for SeaOrmPanelBatch {
    async fn create(&mut self, params: CreatePanelParams) -> Result<i32, DbErr> {
        let savepoint = self.txn.begin().await?;

        match PanelRepository::new(&savepoint).create(params).await {
            Ok(panel_id) => {
                savepoint.commit().await?;
                Ok(panel_id)
            }
            Err(e) => {
                savepoint.rollback().await?;
                Err(e)
            }
        }
    }

    async fn commit(self: Box<Self>) -> Result<(), DbErr> {
        self.txn.commit().await
    }
}

#[async_trait]
impl ImportStore for SeaOrmImportStore {
    async fn set_language(&self, guild_id: u64, language: &str) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_language(guild_id, language)
            .await
    }

    async fn set_archive_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_archive_channel(guild_id, channel_id)
            .await
    }

    async fn set_channel_category(&self, guild_id: u64, category_id: u64) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_channel_category(guild_id, category_id)
            .await
    }

    async fn set_autoclose(
        &self,
        guild_id: u64,
        settings: &AutoCloseSettings,
    ) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_autoclose(guild_id, settings)
            .await
    }

    async fn set_claim_settings(
        &self,
        guild_id: u64,
        settings: &ClaimSettings,
    ) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_claim_settings(guild_id, settings)
            .await
    }

    async fn set_close_confirmation(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_close_confirmation(guild_id, enabled)
            .await
    }

    async fn set_custom_colour(
        &self,
        guild_id: u64,
        colour_id: i16,
        value: i32,
    ) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_custom_colour(guild_id, colour_id, value)
            .await
    }

    async fn set_feedback_enabled(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_feedback_enabled(guild_id, enabled)
            .await
    }

    async fn set_guild_metadata(
        &self,
        guild_id: u64,
        metadata: &GuildMetadata,
    ) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_metadata(guild_id, metadata)
            .await
    }

    async fn set_naming_scheme(&self, guild_id: u64, scheme: NamingScheme) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_naming_scheme(guild_id, scheme)
            .await
    }

    async fn set_ticket_limit(&self, guild_id: u64, limit: u8) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_ticket_limit(guild_id, limit)
            .await
    }

    async fn set_ticket_permissions(
        &self,
        guild_id: u64,
        permissions: &TicketPermissions,
    ) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_ticket_permissions(guild_id, permissions)
            .await
    }

    async fn set_users_can_close(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_users_can_close(guild_id, enabled)
            .await
    }

    async fn set_welcome_message(&self, guild_id: u64, message: &str) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_welcome_message(guild_id, message)
            .await
    }

    async fn set_settings(&self, guild_id: u64, settings: &Settings) -> Result<(), DbErr> {
        GuildSettingRepository::new(&self.db)
            .set_settings(guild_id, settings)
            .await
    }

    async fn add_blacklisted_user(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        GuildAccessRepository::new(&self.db)
            .add_blacklisted_user(guild_id, user_id)
            .await
    }

    async fn add_blacklisted_role(&self, guild_id: u64, role_id: u64) -> Result<(), DbErr> {
        GuildAccessRepository::new(&self.db)
            .add_blacklisted_role(guild_id, role_id)
            .await
    }

    async fn set_server_blacklisted(&self, guild_id: u64, reason: &str) -> Result<(), DbErr> {
        GuildAccessRepository::new(&self.db)
            .set_server_blacklisted(guild_id, reason)
            .await
    }

    async fn add_on_call_user(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        GuildAccessRepository::new(&self.db)
            .add_on_call_user(guild_id, user_id)
            .await
    }

    async fn grant_user_permission(
        &self,
        guild_id: u64,
        user_id: u64,
        support: bool,
        admin: bool,
    ) -> Result<(), DbErr> {
        GuildAccessRepository::new(&self.db)
            .grant_user_permission(guild_id, user_id, support, admin)
            .await
    }

    async fn grant_role_permission(
        &self,
        guild_id: u64,
        role_id: u64,
        support: bool,
        admin: bool,
    ) -> Result<(), DbErr> {
        GuildAccessRepository::new(&self.db)
            .grant_role_permission(guild_id, role_id, support, admin)
            .await
    }

    async fn create_tag(&self, guild_id: u64, tag: &Tag) -> Result<(), DbErr> {
        TagRepository::new(&self.db).upsert(guild_id, tag).await
    }

    async fn create_support_team(&self, guild_id: u64, name: &str) -> Result<i32, DbErr> {
        SupportTeamRepository::new(&self.db)
            .create(guild_id, name)
            .await
    }

    async fn add_team_member(&self, team_id: i32, user_id: u64) -> Result<(), DbErr> {
        SupportTeamRepository::new(&self.db)
            .add_member(team_id, user_id)
            .await
    }

    async fn add_team_role(&self, team_id: i32, role_id: u64) -> Result<(), DbErr> {
        SupportTeamRepository::new(&self.db)
            .add_role(team_id, role_id)
            .await
    }

    async fn create_form(
        &self,
        guild_id: u64,
        title: &str,
        custom_id: &str,
    ) -> Result<i32, DbErr> {
        FormRepository::new(&self.db)
            .create(guild_id, title, custom_id)
            .await
    }

    async fn create_form_input(&self, params: CreateFormInputParams) -> Result<i32, DbErr> {
        FormRepository::new(&self.db).create_input(params).await
    }

    async fn create_embed(
        &self,
        guild_id: u64,
        embed: &CustomEmbed,
        fields: &[EmbedField],
    ) -> Result<i32, DbErr> {
        EmbedRepository::new(&self.db)
            .create(guild_id, embed, fields)
            .await
    }

    async fn count_panels(&self, guild_id: u64) -> Result<u64, DbErr> {
        PanelRepository::new(&self.db).count_by_guild(guild_id).await
    }

    async fn begin_panel_batch(&self) -> Result<Box<dyn PanelBatch>, DbErr> {
        let txn = self.db.begin().await?;

        Ok(Box::new(SeaOrmPanelBatch { txn }))
    }

    async fn set_panel_access_control_rules(
        &self,
        panel_id: i32,
        rules: Vec<AccessControlRuleParams>,
    ) -> Result<(), DbErr> {
        PanelRepository::new(&self.db)
            .set_access_control_rules(panel_id, rules)
            .await
    }

    async fn set_panel_mention_user(
        &self,
        panel_id: i32,
        should_mention: bool,
    ) -> Result<(), DbErr> {
        PanelRepository::new(&self.db)
            .set_mention_user(panel_id, should_mention)
            .await
    }

    async fn add_panel_role_mention(&self, panel_id: i32, role_id: u64) -> Result<(), DbErr> {
        PanelRepository::new(&self.db)
            .add_role_mention(panel_id, role_id)
            .await
    }

    async fn set_panel_teams(&self, panel_id: i32, team_ids: Vec<i32>) -> Result<(), DbErr> {
        PanelRepository::new(&self.db)
            .set_teams(panel_id, team_ids)
            .await
    }

    async fn create_multi_panel(&self, guild_id: u64, panel: &MultiPanel) -> Result<i32, DbErr> {
        MultiPanelRepository::new(&self.db)
            .create(guild_id, panel)
            .await
    }

    async fn add_multi_panel_target(
        &self,
        multi_panel_id: i32,
        panel_id: i32,
    ) -> Result<(), DbErr> {
        MultiPanelRepository::new(&self.db)
            .add_target(multi_panel_id, panel_id)
            .await
    }

    async fn count_tickets(&self, guild_id: u64) -> Result<u64, DbErr> {
        TicketRepository::new(&self.db).count_by_guild(guild_id).await
    }

    async fn import_tickets(
        &self,
        guild_id: u64,
        tickets: Vec<ImportTicketParams>,
    ) -> Result<(), DbErr> {
        TicketRepository::new(&self.db).import(guild_id, tickets).await
    }

    async fn import_ticket_members(
        &self,
        guild_id: u64,
        members: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .add_members(guild_id, members)
            .await
    }

    async fn import_last_messages(
        &self,
        guild_id: u64,
        messages: Vec<LastMessageParams>,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_last_messages(guild_id, messages)
            .await
    }

    async fn import_ticket_claims(
        &self,
        guild_id: u64,
        claims: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_claims(guild_id, claims)
            .await
    }

    async fn import_service_ratings(
        &self,
        guild_id: u64,
        ratings: Vec<(i32, i16)>,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_ratings(guild_id, ratings)
            .await
    }

    async fn import_participants(
        &self,
        guild_id: u64,
        participants: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .add_participants(guild_id, participants)
            .await
    }

    async fn set_first_response_time(
        &self,
        guild_id: u64,
        ticket_id: i32,
        user_id: u64,
        response_time: Duration,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_first_response_time(guild_id, ticket_id, user_id, response_time)
            .await
    }

    async fn add_exit_survey_response(
        &self,
        guild_id: u64,
        response: ExitSurveyResponseParams,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_exit_survey_response(guild_id, response)
            .await
    }

    async fn set_close_reason(
        &self,
        guild_id: u64,
        reason: CloseReasonParams,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_close_reason(guild_id, reason)
            .await
    }

    async fn add_autoclose_excluded(&self, guild_id: u64, ticket_id: i32) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .add_autoclose_excluded(guild_id, ticket_id)
            .await
    }

    async fn set_archive_message(
        &self,
        guild_id: u64,
        ticket_id: i32,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), DbErr> {
        TicketHistoryRepository::new(&self.db)
            .set_archive_message(guild_id, ticket_id, channel_id, message_id)
            .await
    }
}

/// Mapping store backed by the `import_mapping` table.
pub struct SeaOrmMappingStore {
    db: DatabaseConnection,
}

impl SeaOrmMappingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MappingStore for SeaOrmMappingStore {
    async fn get_mapping(
        &self,
        guild_id: u64,
    ) -> Result<HashMap<EntityClass, HashMap<i32, i32>>, DbErr> {
        let stored = ImportMappingRepository::new(&self.db)
            .get_by_guild(guild_id)
            .await?;

        let mut mappings = HashMap::new();
        for (area, ids) in stored {
            match EntityClass::from_area(&area) {
                Some(class) => {
                    mappings.insert(class, ids);
                }
                None => tracing::warn!(
                    "Ignoring {} mappings of unknown area {:?} for guild {}",
                    ids.len(),
                    area,
                    guild_id
                ),
            }
        }

        Ok(mappings)
    }

    async fn set_mapping(
        &self,
        guild_id: u64,
        class: EntityClass,
        source_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr> {
        ImportMappingRepository::new(&self.db)
            .set(guild_id, class.area(), source_id, target_id)
            .await
    }
}
