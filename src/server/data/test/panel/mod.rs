use crate::server::{
    data::panel::PanelRepository,
    model::{
        guild_data::AccessControlAction,
        import::{AccessControlRuleParams, CreatePanelParams},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod set_access_control_rules;
mod set_teams;

fn panel_params(guild_id: u64, custom_id: &str) -> CreatePanelParams {
    CreatePanelParams {
        guild_id,
        message_id: 1,
        channel_id: 2,
        title: "Support (Imported)".to_string(),
        content: "Open a ticket".to_string(),
        colour: 0x2ecc71,
        target_category: 3,
        emoji_name: None,
        emoji_id: None,
        welcome_message_embed: None,
        with_default_team: true,
        custom_id: custom_id.to_string(),
        image_url: None,
        thumbnail_url: None,
        button_style: 1,
        button_label: "Open".to_string(),
        form_id: None,
        naming_scheme: None,
        force_disabled: false,
        disabled: false,
        exit_survey_form_id: None,
        pending_category: None,
    }
}
