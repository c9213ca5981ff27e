use crate::server::{data::ticket::TicketRepository, model::import::ImportTicketParams};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_guild;
mod import;

fn ticket(id: i32) -> ImportTicketParams {
    ImportTicketParams {
        id,
        user_id: 555,
        channel_id: None,
        open: false,
        open_time: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        welcome_message_id: None,
        panel_id: None,
        has_transcript: true,
        close_time: None,
        is_thread: false,
        join_message_id: None,
        notes_thread_id: None,
    }
}
