//! Collaborator seams of the import orchestrator.
//!
//! The orchestrator only talks to storage, premium lookup, Discord and object storage
//! through these traits. Production implementations live in the data and service layers;
//! tests substitute in-memory fakes.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;
use sea_orm::DbErr;

use crate::server::{
    error::import::ImportError,
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
        premium::PremiumTier,
    },
};

/// Persisted source-id to target-id mappings of previous imports.
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Loads every mapping recorded for the guild, grouped by entity class.
    async fn get_mapping(
        &self,
        guild_id: u64,
    ) -> Result<HashMap<EntityClass, HashMap<i32, i32>>, DbErr>;

    /// Records one mapping. Recording an already mapped source id keeps the first mapping.
    async fn set_mapping(
        &self,
        guild_id: u64,
        class: EntityClass,
        source_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr>;
}

#[async_trait]
pub trait PremiumLookup: Send + Sync {
    async fn get_tier(&self, guild_id: u64) -> Result<PremiumTier, DbErr>;
}

#[async_trait]
pub trait GuildOwnerLookup: Send + Sync {
    async fn get_owner_id(&self, guild_id: u64) -> Result<u64, ImportError>;
}

/// Object storage for verified transcript archives.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn put_transcripts(&self, guild_id: u64, archive: Vec<u8>) -> std::io::Result<()>;
}

/// A transaction that panels are created in.
///
/// A failed `create` only discards that panel; nothing is visible to other readers until
/// `commit` succeeds.
#[async_trait]
pub trait PanelBatch: Send {
    async fn create(&mut self, params: CreatePanelParams) -> Result<i32, DbErr>;

    async fn commit(self: Box<Self>) -> Result<(), DbErr>;
}

/// Writes imported records into the target guild.
///
/// Every method is scoped to the target guild. Methods that add to a set of rows are
/// idempotent; methods named `set_*` replace the previous value.
#[async_trait]
pub trait ImportStore: Send + Sync {
    // Guild settings
    async fn set_language(&self, guild_id: u64, language: &str) -> Result<(), DbErr>;
    async fn set_archive_channel(&self, guild_id: u64, channel_id: Option<u64>)
        -> Result<(), DbErr>;
    async fn set_channel_category(&self, guild_id: u64, category_id: u64) -> Result<(), DbErr>;
    async fn set_autoclose(&self, guild_id: u64, settings: &AutoCloseSettings)
        -> Result<(), DbErr>;
    async fn set_claim_settings(&self, guild_id: u64, settings: &ClaimSettings)
        -> Result<(), DbErr>;
    async fn set_close_confirmation(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr>;
    async fn set_custom_colour(&self, guild_id: u64, colour_id: i16, value: i32)
        -> Result<(), DbErr>;
    async fn set_feedback_enabled(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr>;
    async fn set_guild_metadata(&self, guild_id: u64, metadata: &GuildMetadata)
        -> Result<(), DbErr>;
    async fn set_naming_scheme(&self, guild_id: u64, scheme: NamingScheme) -> Result<(), DbErr>;
    async fn set_ticket_limit(&self, guild_id: u64, limit: u8) -> Result<(), DbErr>;
    async fn set_ticket_permissions(
        &self,
        guild_id: u64,
        permissions: &TicketPermissions,
    ) -> Result<(), DbErr>;
    async fn set_users_can_close(&self, guild_id: u64, enabled: bool) -> Result<(), DbErr>;
    async fn set_welcome_message(&self, guild_id: u64, message: &str) -> Result<(), DbErr>;
    async fn set_settings(&self, guild_id: u64, settings: &Settings) -> Result<(), DbErr>;

    // Access control
    async fn add_blacklisted_user(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr>;
    async fn add_blacklisted_role(&self, guild_id: u64, role_id: u64) -> Result<(), DbErr>;
    async fn set_server_blacklisted(&self, guild_id: u64, reason: &str) -> Result<(), DbErr>;
    /// Puts the user on call unless they already are.
    async fn add_on_call_user(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr>;
    /// Grants the given levels without revoking levels the user already holds.
    async fn grant_user_permission(
        &self,
        guild_id: u64,
        user_id: u64,
        support: bool,
        admin: bool,
    ) -> Result<(), DbErr>;
    async fn grant_role_permission(
        &self,
        guild_id: u64,
        role_id: u64,
        support: bool,
        admin: bool,
    ) -> Result<(), DbErr>;
    async fn create_tag(&self, guild_id: u64, tag: &Tag) -> Result<(), DbErr>;

    // Support teams
    async fn create_support_team(&self, guild_id: u64, name: &str) -> Result<i32, DbErr>;
    async fn add_team_member(&self, team_id: i32, user_id: u64) -> Result<(), DbErr>;
    async fn add_team_role(&self, team_id: i32, role_id: u64) -> Result<(), DbErr>;

    // Forms and embeds
    async fn create_form(&self, guild_id: u64, title: &str, custom_id: &str)
        -> Result<i32, DbErr>;
    async fn create_form_input(&self, params: CreateFormInputParams) -> Result<i32, DbErr>;
    async fn create_embed(
        &self,
        guild_id: u64,
        embed: &CustomEmbed,
        fields: &[EmbedField],
    ) -> Result<i32, DbErr>;

    // Panels
    async fn count_panels(&self, guild_id: u64) -> Result<u64, DbErr>;
    async fn begin_panel_batch(&self) -> Result<Box<dyn PanelBatch>, DbErr>;
    async fn set_panel_access_control_rules(
        &self,
        panel_id: i32,
        rules: Vec<AccessControlRuleParams>,
    ) -> Result<(), DbErr>;
    async fn set_panel_mention_user(&self, panel_id: i32, should_mention: bool)
        -> Result<(), DbErr>;
    async fn add_panel_role_mention(&self, panel_id: i32, role_id: u64) -> Result<(), DbErr>;
    async fn set_panel_teams(&self, panel_id: i32, team_ids: Vec<i32>) -> Result<(), DbErr>;
    async fn create_multi_panel(&self, guild_id: u64, panel: &MultiPanel) -> Result<i32, DbErr>;
    async fn add_multi_panel_target(&self, multi_panel_id: i32, panel_id: i32)
        -> Result<(), DbErr>;

    // Tickets
    async fn count_tickets(&self, guild_id: u64) -> Result<u64, DbErr>;
    /// Inserts all tickets atomically.
    async fn import_tickets(
        &self,
        guild_id: u64,
        tickets: Vec<ImportTicketParams>,
    ) -> Result<(), DbErr>;
    async fn import_ticket_members(
        &self,
        guild_id: u64,
        members: Vec<(i32, u64)>,
    ) -> Result<(), DbErr>;
    async fn import_last_messages(
        &self,
        guild_id: u64,
        messages: Vec<LastMessageParams>,
    ) -> Result<(), DbErr>;
    async fn import_ticket_claims(
        &self,
        guild_id: u64,
        claims: Vec<(i32, u64)>,
    ) -> Result<(), DbErr>;
    async fn import_service_ratings(
        &self,
        guild_id: u64,
        ratings: Vec<(i32, i16)>,
    ) -> Result<(), DbErr>;
    async fn import_participants(
        &self,
        guild_id: u64,
        participants: Vec<(i32, u64)>,
    ) -> Result<(), DbErr>;
    async fn set_first_response_time(
        &self,
        guild_id: u64,
        ticket_id: i32,
        user_id: u64,
        response_time: Duration,
    ) -> Result<(), DbErr>;
    async fn add_exit_survey_response(
        &self,
        guild_id: u64,
        response: ExitSurveyResponseParams,
    ) -> Result<(), DbErr>;
    async fn set_close_reason(&self, guild_id: u64, reason: CloseReasonParams)
        -> Result<(), DbErr>;
    async fn add_autoclose_excluded(&self, guild_id: u64, ticket_id: i32) -> Result<(), DbErr>;
    async fn set_archive_message(
        &self,
        guild_id: u64,
        ticket_id: i32,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), DbErr>;
}
