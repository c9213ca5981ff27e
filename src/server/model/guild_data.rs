//! Documents carried inside a signed guild export archive.
//!
//! `GuildData` is the `data.json` payload of a data archive. Ids of records owned by the
//! dashboard (tickets, forms, panels, ...) are the source installation's integer ids and
//! are remapped during import; Discord snowflakes are kept as-is. Every field defaults
//! when absent so that archives produced by older exporters still decode.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A Discord snowflake id.
///
/// Exported as a decimal string to survive JSON number precision loss, but numeric
/// values are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Snowflake(pub u64);

impl Snowflake {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Snowflake {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// Guild export payload (`data.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildData {
    pub guild_id: Snowflake,

    // Guild settings
    pub active_language: Option<String>,
    pub archive_channel: Option<Snowflake>,
    pub channel_category: Option<Snowflake>,
    pub autoclose_settings: Option<AutoCloseSettings>,
    pub claim_settings: Option<ClaimSettings>,
    pub close_confirmation_enabled: bool,
    pub custom_colors: HashMap<i16, i32>,
    pub feedback_enabled: bool,
    pub guild_metadata: Option<GuildMetadata>,
    pub naming_scheme: Option<NamingScheme>,
    pub ticket_limit: Option<i32>,
    pub ticket_permissions: Option<TicketPermissions>,
    pub users_can_close: bool,
    pub welcome_message: Option<String>,
    pub settings: Option<Settings>,
    pub guild_is_globally_blacklisted: bool,

    // Staff and access
    pub guild_blacklisted_users: Vec<Snowflake>,
    pub guild_blacklisted_roles: Vec<Snowflake>,
    pub on_call_users: Vec<Snowflake>,
    pub user_permissions: Vec<Permission>,
    pub role_permissions: Vec<Permission>,
    pub support_teams: Vec<SupportTeam>,
    pub support_team_users: HashMap<i32, Vec<Snowflake>>,
    pub support_team_roles: HashMap<i32, Vec<Snowflake>>,

    pub tags: Vec<Tag>,

    pub forms: Vec<Form>,
    pub form_inputs: Vec<FormInput>,
    pub embeds: Vec<CustomEmbed>,
    pub embed_fields: Vec<EmbedField>,

    pub panels: Vec<Panel>,
    pub panel_access_control_rules: HashMap<i32, Vec<PanelAccessControlRule>>,
    pub panel_mention_user: HashMap<i32, bool>,
    pub panel_role_mentions: HashMap<i32, Vec<Snowflake>>,
    pub panel_teams: HashMap<i32, Vec<i32>>,
    pub multi_panels: Vec<MultiPanel>,
    pub multi_panel_targets: HashMap<i32, Vec<i32>>,

    pub tickets: Vec<Ticket>,
    pub ticket_additional_members: HashMap<i32, Vec<Snowflake>>,
    pub ticket_last_messages: Vec<TicketUnion<TicketLastMessage>>,
    pub ticket_claims: Vec<TicketUnion<Snowflake>>,
    pub service_ratings: Vec<TicketUnion<i16>>,
    pub participants: HashMap<i32, Vec<Snowflake>>,
    pub first_response_times: Vec<FirstResponseTime>,
    pub exit_survey_responses: Vec<TicketUnion<ExitSurveyResponse>>,
    pub close_reasons: Vec<TicketUnion<CloseMetadata>>,
    pub autoclose_excluded: Vec<i32>,
    pub archive_messages: Vec<TicketUnion<ArchiveMessage>>,
}

/// A per-ticket record keyed by the ticket's source id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketUnion<T> {
    pub ticket_id: i32,
    pub data: T,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoCloseSettings {
    pub enabled: bool,
    /// Seconds since open with no staff response before closing
    pub since_open_with_no_response: Option<i64>,
    /// Seconds since the last message before closing
    pub since_last_message: Option<i64>,
    pub on_user_leave: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimSettings {
    pub support_can_view: bool,
    pub support_can_type: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildMetadata {
    pub on_call_role: Option<Snowflake>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    Id,
    Username,
}

impl NamingScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketPermissions {
    pub attach_files: bool,
    pub embed_links: bool,
    pub add_reactions: bool,
}

/// Guild-wide dashboard settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub hide_claim_button: bool,
    pub disable_open_command: bool,
    pub context_menu_permission_level: i32,
    pub context_menu_add_sender: bool,
    /// Source id of the panel opened from the message context menu
    pub context_menu_panel: Option<i32>,
    pub store_transcripts: bool,
    pub use_threads: bool,
    pub thread_archive_duration: i32,
    pub ticket_notification_channel: Option<Snowflake>,
    pub overflow_enabled: bool,
    pub overflow_category_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    pub snowflake: Snowflake,
    pub is_support: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportTeam {
    pub id: i32,
    pub name: String,
    pub on_call_role: Option<Snowflake>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// Tag name, unique per guild
    pub id: String,
    pub content: Option<String>,
    pub embed: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub id: i32,
    pub title: String,
    pub custom_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub id: i32,
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEmbed {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub colour: i32,
    pub author_name: Option<String>,
    pub author_icon_url: Option<String>,
    pub author_url: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub footer_text: Option<String>,
    pub footer_icon_url: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedField {
    pub field_id: i32,
    pub embed_id: i32,
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Panel {
    pub panel_id: i32,
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub title: String,
    pub content: String,
    pub colour: i32,
    pub target_category: Snowflake,
    pub emoji_name: Option<String>,
    pub emoji_id: Option<Snowflake>,
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
    pub pending_category: Option<Snowflake>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessControlAction {
    Allow,
    Deny,
}

impl AccessControlAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelAccessControlRule {
    pub role_id: Snowflake,
    pub action: AccessControlAction,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiPanel {
    pub id: i32,
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub select_menu: bool,
    pub embed: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: i32,
    pub channel_id: Option<Snowflake>,
    pub user_id: Snowflake,
    pub open: bool,
    pub open_time: DateTime<Utc>,
    pub welcome_message_id: Option<Snowflake>,
    pub panel_id: Option<i32>,
    pub has_transcript: bool,
    pub close_time: Option<DateTime<Utc>>,
    pub is_thread: bool,
    pub join_message_id: Option<Snowflake>,
    pub notes_thread_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketLastMessage {
    pub last_message_id: Option<Snowflake>,
    pub last_message_time: Option<DateTime<Utc>>,
    pub user_id: Option<Snowflake>,
    pub user_is_staff: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstResponseTime {
    pub ticket_id: i32,
    pub user_id: Snowflake,
    /// Elapsed time in nanoseconds
    pub response_time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExitSurveyResponse {
    pub form_id: Option<i32>,
    pub question_id: Option<i32>,
    pub response: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloseMetadata {
    pub reason: Option<String>,
    pub closed_by: Option<Snowflake>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveMessage {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
}

/// Verified contents of a transcripts archive.
#[derive(Debug, Clone, Default)]
pub struct GuildTranscripts {
    pub guild_id: u64,
    /// Transcript bodies keyed by source ticket id
    pub transcripts: HashMap<i32, Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_numeric_snowflakes() {
        let text: Snowflake = serde_json::from_str("\"1234567890123456789\"").unwrap();
        let number: Snowflake = serde_json::from_str("42").unwrap();

        assert_eq!(text.get(), 1234567890123456789);
        assert_eq!(number.get(), 42);
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"1234567890123456789\"");
    }

    #[test]
    fn decodes_sparse_document_with_defaults() {
        let data: GuildData = serde_json::from_str(
            r#"{"guild_id":"123","support_team_users":{"4":["5","6"]},"tickets":[{"id":1}]}"#,
        )
        .unwrap();

        assert_eq!(data.guild_id.get(), 123);
        assert_eq!(data.support_team_users[&4].len(), 2);
        assert_eq!(data.tickets[0].id, 1);
        assert!(data.tags.is_empty());
        assert!(data.active_language.is_none());
    }
}
