//! Ticket fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::ticket;

/// Default test guild ID for tickets.
pub const DEFAULT_GUILD_ID: i64 = 987654321;

/// Default test ticket opener.
pub const DEFAULT_USER_ID: i64 = 555000111;

/// Creates a closed ticket entity model with default values.
pub fn entity() -> ticket::Model {
    entity_builder().build()
}

/// Creates a ticket entity builder for customization.
pub fn entity_builder() -> TicketEntityBuilder {
    TicketEntityBuilder {
        model: ticket::Model {
            guild_id: DEFAULT_GUILD_ID,
            id: 1,
            user_id: DEFAULT_USER_ID,
            channel_id: None,
            open: false,
            open_time: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            welcome_message_id: None,
            panel_id: None,
            has_transcript: true,
            close_time: Some(Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap()),
            is_thread: false,
            join_message_id: None,
            notes_thread_id: None,
        },
    }
}

/// Builder for creating customized ticket entity models.
pub struct TicketEntityBuilder {
    model: ticket::Model,
}

impl TicketEntityBuilder {
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.model.guild_id = guild_id;
        self
    }

    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn panel_id(mut self, panel_id: Option<i32>) -> Self {
        self.model.panel_id = panel_id;
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.model.open = open;
        if open {
            self.model.close_time = None;
        }
        self
    }

    pub fn build(self) -> ticket::Model {
        self.model
    }
}
