//! Panel factory for creating test panel entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test panels with customizable fields.
///
/// Default values are sourced from the panel fixture; the id is left to the database.
///
/// # Example
///
/// ```rust,ignore
/// let panel = PanelFactory::new(&db, 123)
///     .title("Billing")
///     .build()
///     .await?;
/// ```
pub struct PanelFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::panel::Model,
}

impl<'a> PanelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        let id = next_id();
        let entity = fixture::panel::entity_builder()
            .guild_id(guild_id)
            .title(format!("Panel {}", id))
            .custom_id(format!("panel-{}", id))
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn form_id(mut self, form_id: Option<i32>) -> Self {
        self.entity.form_id = form_id;
        self
    }

    /// Inserts the panel into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created panel with its generated id
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::panel::Model, DbErr> {
        let e = self.entity;

        entity::panel::ActiveModel {
            guild_id: ActiveValue::Set(e.guild_id),
            message_id: ActiveValue::Set(e.message_id),
            channel_id: ActiveValue::Set(e.channel_id),
            title: ActiveValue::Set(e.title),
            content: ActiveValue::Set(e.content),
            colour: ActiveValue::Set(e.colour),
            target_category: ActiveValue::Set(e.target_category),
            emoji_name: ActiveValue::Set(e.emoji_name),
            emoji_id: ActiveValue::Set(e.emoji_id),
            welcome_message_embed: ActiveValue::Set(e.welcome_message_embed),
            with_default_team: ActiveValue::Set(e.with_default_team),
            custom_id: ActiveValue::Set(e.custom_id),
            image_url: ActiveValue::Set(e.image_url),
            thumbnail_url: ActiveValue::Set(e.thumbnail_url),
            button_style: ActiveValue::Set(e.button_style),
            button_label: ActiveValue::Set(e.button_label),
            form_id: ActiveValue::Set(e.form_id),
            naming_scheme: ActiveValue::Set(e.naming_scheme),
            force_disabled: ActiveValue::Set(e.force_disabled),
            disabled: ActiveValue::Set(e.disabled),
            exit_survey_form_id: ActiveValue::Set(e.exit_survey_form_id),
            pending_category: ActiveValue::Set(e.pending_category),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a panel with default values for the guild.
pub async fn create_panel(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::panel::Model, DbErr> {
    PanelFactory::new(db, guild_id).build().await
}
