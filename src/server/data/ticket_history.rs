//! Repository for per-ticket records kept beside the ticket itself.
//!
//! Bulk inserts skip rows that already exist. Single-value records such as claims or close
//! reasons are replaced when written again.

use chrono::Duration;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::import::{
    CloseReasonParams, ExitSurveyResponseParams, LastMessageParams,
};

pub struct TicketHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_members(&self, guild_id: u64, members: Vec<(i32, u64)>) -> Result<(), DbErr> {
        if members.is_empty() {
            return Ok(());
        }

        let models = members
            .into_iter()
            .map(|(ticket_id, user_id)| entity::ticket_member::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                ticket_id: ActiveValue::Set(ticket_id),
                user_id: ActiveValue::Set(user_id as i64),
            });
        entity::prelude::TicketMember::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::ticket_member::Column::GuildId,
                    entity::ticket_member::Column::TicketId,
                    entity::ticket_member::Column::UserId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn add_participants(
        &self,
        guild_id: u64,
        participants: Vec<(i32, u64)>,
    ) -> Result<(), DbErr> {
        if participants.is_empty() {
            return Ok(());
        }

        let models = participants
            .into_iter()
            .map(|(ticket_id, user_id)| entity::participant::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                ticket_id: ActiveValue::Set(ticket_id),
                user_id: ActiveValue::Set(user_id as i64),
            });
        entity::prelude::Participant::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::participant::Column::GuildId,
                    entity::participant::Column::TicketId,
                    entity::participant::Column::UserId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_last_messages(
        &self,
        guild_id: u64,
        messages: Vec<LastMessageParams>,
    ) -> Result<(), DbErr> {
        if messages.is_empty() {
            return Ok(());
        }

        let models = messages
            .into_iter()
            .map(|message| entity::ticket_last_message::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                ticket_id: ActiveValue::Set(message.ticket_id),
                last_message_id: ActiveValue::Set(message.last_message_id.map(|id| id as i64)),
                last_message_time: ActiveValue::Set(message.last_message_time),
                user_id: ActiveValue::Set(message.user_id.map(|id| id as i64)),
                user_is_staff: ActiveValue::Set(message.user_is_staff),
            });
        entity::prelude::TicketLastMessage::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::ticket_last_message::Column::GuildId,
                    entity::ticket_last_message::Column::TicketId,
                ])
                .update_columns([
                    entity::ticket_last_message::Column::LastMessageId,
                    entity::ticket_last_message::Column::LastMessageTime,
                    entity::ticket_last_message::Column::UserId,
                    entity::ticket_last_message::Column::UserIsStaff,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_claims(&self, guild_id: u64, claims: Vec<(i32, u64)>) -> Result<(), DbErr> {
        if claims.is_empty() {
            return Ok(());
        }

        let models = claims
            .into_iter()
            .map(|(ticket_id, user_id)| entity::ticket_claim::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                ticket_id: ActiveValue::Set(ticket_id),
                user_id: ActiveValue::Set(user_id as i64),
            });
        entity::prelude::TicketClaim::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::ticket_claim::Column::GuildId,
                    entity::ticket_claim::Column::TicketId,
                ])
                .update_column(entity::ticket_claim::Column::UserId)
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_ratings(&self, guild_id: u64, ratings: Vec<(i32, i16)>) -> Result<(), DbErr> {
        if ratings.is_empty() {
            return Ok(());
        }

        let models = ratings
            .into_iter()
            .map(|(ticket_id, rating)| entity::service_rating::ActiveModel {
                guild_id: ActiveValue::Set(guild_id as i64),
                ticket_id: ActiveValue::Set(ticket_id),
                rating: ActiveValue::Set(rating),
            });
        entity::prelude::ServiceRating::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::service_rating::Column::GuildId,
                    entity::service_rating::Column::TicketId,
                ])
                .update_column(entity::service_rating::Column::Rating)
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_first_response_time(
        &self,
        guild_id: u64,
        ticket_id: i32,
        user_id: u64,
        response_time: Duration,
    ) -> Result<(), DbErr> {
        entity::prelude::FirstResponseTime::insert(entity::first_response_time::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            ticket_id: ActiveValue::Set(ticket_id),
            user_id: ActiveValue::Set(user_id as i64),
            response_time_ms: ActiveValue::Set(response_time.num_milliseconds()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::first_response_time::Column::GuildId,
                entity::first_response_time::Column::TicketId,
            ])
            .update_columns([
                entity::first_response_time::Column::UserId,
                entity::first_response_time::Column::ResponseTimeMs,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_exit_survey_response(
        &self,
        guild_id: u64,
        response: ExitSurveyResponseParams,
    ) -> Result<(), DbErr> {
        entity::prelude::ExitSurveyResponse::insert(entity::exit_survey_response::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            ticket_id: ActiveValue::Set(response.ticket_id),
            form_id: ActiveValue::Set(response.form_id),
            question_id: ActiveValue::Set(response.question_id),
            response: ActiveValue::Set(response.response),
        })
        .on_conflict(
            OnConflict::columns([
                entity::exit_survey_response::Column::GuildId,
                entity::exit_survey_response::Column::TicketId,
                entity::exit_survey_response::Column::FormId,
                entity::exit_survey_response::Column::QuestionId,
            ])
            .update_column(entity::exit_survey_response::Column::Response)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_close_reason(
        &self,
        guild_id: u64,
        reason: CloseReasonParams,
    ) -> Result<(), DbErr> {
        entity::prelude::CloseReason::insert(entity::close_reason::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            ticket_id: ActiveValue::Set(reason.ticket_id),
            close_reason: ActiveValue::Set(reason.reason),
            closed_by: ActiveValue::Set(reason.closed_by.map(|id| id as i64)),
        })
        .on_conflict(
            OnConflict::columns([
                entity::close_reason::Column::GuildId,
                entity::close_reason::Column::TicketId,
            ])
            .update_columns([
                entity::close_reason::Column::CloseReason,
                entity::close_reason::Column::ClosedBy,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn add_autoclose_excluded(&self, guild_id: u64, ticket_id: i32) -> Result<(), DbErr> {
        entity::prelude::AutocloseExcluded::insert(entity::autoclose_excluded::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            ticket_id: ActiveValue::Set(ticket_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::autoclose_excluded::Column::GuildId,
                entity::autoclose_excluded::Column::TicketId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_archive_message(
        &self,
        guild_id: u64,
        ticket_id: i32,
        channel_id: u64,
        message_id: u64,
    ) -> Result<(), DbErr> {
        entity::prelude::ArchiveMessage::insert(entity::archive_message::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            ticket_id: ActiveValue::Set(ticket_id),
            channel_id: ActiveValue::Set(channel_id as i64),
            message_id: ActiveValue::Set(message_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::archive_message::Column::GuildId,
                entity::archive_message::Column::TicketId,
            ])
            .update_columns([
                entity::archive_message::Column::ChannelId,
                entity::archive_message::Column::MessageId,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
