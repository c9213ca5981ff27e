use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Form, FormInput};
///
/// let test = TestBuilder::new()
///     .with_table(Form)
///     .with_table(FormInput)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds guild-wide settings, permission, blacklist and tag tables.
    pub fn with_settings_tables(self) -> Self {
        self.with_table(GuildSetting)
            .with_table(CustomColour)
            .with_table(GuildBlacklistedUser)
            .with_table(GuildBlacklistedRole)
            .with_table(OnCallUser)
            .with_table(UserPermission)
            .with_table(RolePermission)
            .with_table(ServerBlacklist)
            .with_table(Tag)
    }

    /// Adds support team, form and embed tables in dependency order.
    pub fn with_component_tables(self) -> Self {
        self.with_table(SupportTeam)
            .with_table(SupportTeamMember)
            .with_table(SupportTeamRole)
            .with_table(Form)
            .with_table(FormInput)
            .with_table(Embed)
            .with_table(EmbedField)
    }

    /// Adds panel and multi-panel tables.
    pub fn with_panel_tables(self) -> Self {
        self.with_table(Panel)
            .with_table(PanelAccessControlRule)
            .with_table(PanelUserMention)
            .with_table(PanelRoleMention)
            .with_table(PanelTeam)
            .with_table(MultiPanel)
            .with_table(MultiPanelTarget)
    }

    /// Adds the ticket table and every per-ticket side table.
    pub fn with_ticket_tables(self) -> Self {
        self.with_table(Ticket)
            .with_table(TicketMember)
            .with_table(TicketLastMessage)
            .with_table(TicketClaim)
            .with_table(ServiceRating)
            .with_table(Participant)
            .with_table(FirstResponseTime)
            .with_table(ExitSurveyResponse)
            .with_table(CloseReason)
            .with_table(AutocloseExcluded)
            .with_table(ArchiveMessage)
    }

    /// Adds every table an import touches, including mappings and entitlements.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_import_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_import_tables(self) -> Self {
        self.with_settings_tables()
            .with_component_tables()
            .with_panel_tables()
            .with_ticket_tables()
            .with_table(ImportMapping)
            .with_table(GuildEntitlement)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
