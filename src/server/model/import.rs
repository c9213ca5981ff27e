use chrono::{DateTime, Utc};

use crate::server::model::guild_data::{AccessControlAction, Snowflake};

/// Classes of records whose source ids are remapped during an import.
///
/// Each class owns a separate id space in the mapping store, keyed by its area name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityClass {
    Ticket,
    Form,
    FormInput,
    Panel,
    Embed,
    SupportTeam,
    MultiPanel,
}

impl EntityClass {
    pub const ALL: [EntityClass; 7] = [
        Self::Ticket,
        Self::Form,
        Self::FormInput,
        Self::Panel,
        Self::Embed,
        Self::SupportTeam,
        Self::MultiPanel,
    ];

    /// Area name persisted in the mapping store.
    pub fn area(&self) -> &'static str {
        match self {
            Self::Ticket => "ticket",
            Self::Form => "form",
            Self::FormInput => "form_input",
            Self::Panel => "panel",
            Self::Embed => "embed",
            Self::SupportTeam => "support_team",
            Self::MultiPanel => "multi_panel",
        }
    }

    pub fn from_area(area: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.area() == area)
    }
}

/// An uploaded import request after the HTTP layer has extracted its files.
pub struct ImportRequest {
    pub guild_id: u64,
    /// Discord id of the acting user
    pub user_id: u64,
    pub data_archive: Option<Vec<u8>>,
    pub transcripts_archive: Option<Vec<u8>>,
}

pub struct CreateFormInputParams {
    pub form_id: i32,
    pub position: i32,
    pub custom_id: String,
    pub style: i16,
    pub label: String,
    pub description: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
    pub min_length: Option<i32>,
    pub max_length: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreatePanelParams {
    pub guild_id: u64,
    pub message_id: u64,
    pub channel_id: u64,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub target_category: u64,
    pub emoji_name: Option<String>,
    pub emoji_id: Option<u64>,
    pub welcome_message_embed: Option<i32>,
    pub with_default_team: bool,
    pub custom_id: String,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub button_style: i16,
    pub button_label: String,
    pub form_id: Option<i32>,
    pub naming_scheme: Option<String>,
    pub force_disabled: bool,
    pub disabled: bool,
    pub exit_survey_form_id: Option<i32>,
    pub pending_category: Option<u64>,
}

pub struct AccessControlRuleParams {
    pub role_id: u64,
    pub action: AccessControlAction,
}

#[derive(Debug, Clone)]
pub struct ImportTicketParams {
    /// Id in the target guild's ticket id space
    pub id: i32,
    pub user_id: u64,
    pub channel_id: Option<u64>,
    pub open: bool,
    pub open_time: DateTime<Utc>,
    pub welcome_message_id: Option<u64>,
    pub panel_id: Option<i32>,
    pub has_transcript: bool,
    pub close_time: Option<DateTime<Utc>>,
    pub is_thread: bool,
    pub join_message_id: Option<u64>,
    pub notes_thread_id: Option<u64>,
}

pub struct LastMessageParams {
    pub ticket_id: i32,
    pub last_message_id: Option<u64>,
    pub last_message_time: Option<DateTime<Utc>>,
    pub user_id: Option<u64>,
    pub user_is_staff: Option<bool>,
}

pub struct CloseReasonParams {
    pub ticket_id: i32,
    pub reason: Option<String>,
    pub closed_by: Option<u64>,
}

pub struct ExitSurveyResponseParams {
    pub ticket_id: i32,
    pub form_id: i32,
    pub question_id: i32,
    pub response: String,
}

pub(crate) fn snowflakes(ids: &[Snowflake]) -> Vec<u64> {
    ids.iter().map(|id| id.get()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_names_round_trip() {
        for class in EntityClass::ALL {
            assert_eq!(EntityClass::from_area(class.area()), Some(class));
        }
        assert_eq!(EntityClass::from_area("tag"), None);
    }
}
