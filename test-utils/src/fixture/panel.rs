//! Panel fixtures for creating in-memory test data.

use entity::panel;

/// Default test guild ID for panels.
pub const DEFAULT_GUILD_ID: i64 = 987654321;

/// Default test panel title.
pub const DEFAULT_TITLE: &str = "Open a ticket!";

/// Creates a panel entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - guild_id: `987654321`
/// - title: `"Open a ticket!"`
/// - every optional reference: `None`
/// - force_disabled / disabled: `false`
pub fn entity() -> panel::Model {
    entity_builder().build()
}

/// Creates a panel entity builder for customization.
pub fn entity_builder() -> PanelEntityBuilder {
    PanelEntityBuilder {
        model: panel::Model {
            id: 1,
            guild_id: DEFAULT_GUILD_ID,
            message_id: 1001,
            channel_id: 1002,
            title: DEFAULT_TITLE.to_string(),
            content: "By clicking the button, a ticket will be opened for you.".to_string(),
            colour: 0x2ECC71,
            target_category: 1003,
            emoji_name: None,
            emoji_id: None,
            welcome_message_embed: None,
            with_default_team: true,
            custom_id: "panel-custom-id".to_string(),
            image_url: None,
            thumbnail_url: None,
            button_style: 1,
            button_label: "Open a ticket!".to_string(),
            form_id: None,
            naming_scheme: None,
            force_disabled: false,
            disabled: false,
            exit_survey_form_id: None,
            pending_category: None,
        },
    }
}

/// Builder for creating customized panel entity models.
pub struct PanelEntityBuilder {
    model: panel::Model,
}

impl PanelEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.model.guild_id = guild_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.model.title = title.into();
        self
    }

    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.model.custom_id = custom_id.into();
        self
    }

    pub fn form_id(mut self, form_id: Option<i32>) -> Self {
        self.model.form_id = form_id;
        self
    }

    pub fn build(self) -> panel::Model {
        self.model
    }
}
