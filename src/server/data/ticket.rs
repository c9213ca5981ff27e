//! Ticket repository.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::model::import::ImportTicketParams;

/// Rows per INSERT statement when importing tickets.
const INSERT_CHUNK_SIZE: usize = 1000;

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the tickets of a guild.
    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id as i64))
            .count(self.db)
            .await
    }

    /// Inserts tickets with their given ids, all or nothing.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the tickets belong to
    /// - `tickets` - Tickets with their final per-guild ids
    ///
    /// # Returns
    /// - `Ok(())` - Every ticket was inserted
    /// - `Err(DbErr)` - Nothing was inserted, e.g. because an id is already taken
    pub async fn import(
        &self,
        guild_id: u64,
        tickets: Vec<ImportTicketParams>,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        for chunk in tickets.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk.iter().map(|ticket| entity::ticket::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                id: ActiveValue::Set(ticket.id),
                user_id: ActiveValue::Set(ticket.user_id as i64),
                channel_id: ActiveValue::Set(ticket.channel_id.map(|id| id as i64)),
                open: ActiveValue::Set(ticket.open),
                open_time: ActiveValue::Set(ticket.open_time),
                welcome_message_id: ActiveValue::Set(ticket.welcome_message_id.map(|id| id as i64)),
                panel_id: ActiveValue::Set(ticket.panel_id),
                has_transcript: ActiveValue::Set(ticket.has_transcript),
                close_time: ActiveValue::Set(ticket.close_time),
                is_thread: ActiveValue::Set(ticket.is_thread),
                join_message_id: ActiveValue::Set(ticket.join_message_id.map(|id| id as i64)),
                notes_thread_id: ActiveValue::Set(ticket.notes_thread_id.map(|id| id as i64)),
            });
            entity::prelude::Ticket::insert_many(models)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await
    }
}
