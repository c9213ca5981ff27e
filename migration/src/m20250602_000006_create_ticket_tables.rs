use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(big_integer(Ticket::GuildId))
                    .col(integer(Ticket::Id))
                    .col(big_integer(Ticket::UserId))
                    .col(big_integer_null(Ticket::ChannelId))
                    .col(boolean(Ticket::Open))
                    .col(timestamp_with_time_zone(Ticket::OpenTime))
                    .col(big_integer_null(Ticket::WelcomeMessageId))
                    .col(integer_null(Ticket::PanelId))
                    .col(boolean(Ticket::HasTranscript))
                    .col(timestamp_with_time_zone_null(Ticket::CloseTime))
                    .col(boolean(Ticket::IsThread))
                    .col(big_integer_null(Ticket::JoinMessageId))
                    .col(big_integer_null(Ticket::NotesThreadId))
                    .primary_key(
                        Index::create()
                            .col(Ticket::GuildId)
                            .col(Ticket::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TicketMember::Table)
                    .if_not_exists()
                    .col(big_integer(TicketMember::GuildId))
                    .col(integer(TicketMember::TicketId))
                    .col(big_integer(TicketMember::UserId))
                    .primary_key(
                        Index::create()
                            .col(TicketMember::GuildId)
                            .col(TicketMember::TicketId)
                            .col(TicketMember::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TicketLastMessage::Table)
                    .if_not_exists()
                    .col(big_integer(TicketLastMessage::GuildId))
                    .col(integer(TicketLastMessage::TicketId))
                    .col(big_integer_null(TicketLastMessage::LastMessageId))
                    .col(timestamp_with_time_zone_null(TicketLastMessage::LastMessageTime))
                    .col(big_integer_null(TicketLastMessage::UserId))
                    .col(boolean_null(TicketLastMessage::UserIsStaff))
                    .primary_key(
                        Index::create()
                            .col(TicketLastMessage::GuildId)
                            .col(TicketLastMessage::TicketId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TicketClaim::Table)
                    .if_not_exists()
                    .col(big_integer(TicketClaim::GuildId))
                    .col(integer(TicketClaim::TicketId))
                    .col(big_integer(TicketClaim::UserId))
                    .primary_key(
                        Index::create()
                            .col(TicketClaim::GuildId)
                            .col(TicketClaim::TicketId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServiceRating::Table)
                    .if_not_exists()
                    .col(big_integer(ServiceRating::GuildId))
                    .col(integer(ServiceRating::TicketId))
                    .col(small_integer(ServiceRating::Rating))
                    .primary_key(
                        Index::create()
                            .col(ServiceRating::GuildId)
                            .col(ServiceRating::TicketId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Participant::Table)
                    .if_not_exists()
                    .col(big_integer(Participant::GuildId))
                    .col(integer(Participant::TicketId))
                    .col(big_integer(Participant::UserId))
                    .primary_key(
                        Index::create()
                            .col(Participant::GuildId)
                            .col(Participant::TicketId)
                            .col(Participant::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FirstResponseTime::Table)
                    .if_not_exists()
                    .col(big_integer(FirstResponseTime::GuildId))
                    .col(integer(FirstResponseTime::TicketId))
                    .col(big_integer(FirstResponseTime::UserId))
                    .col(big_integer(FirstResponseTime::ResponseTimeMs))
                    .primary_key(
                        Index::create()
                            .col(FirstResponseTime::GuildId)
                            .col(FirstResponseTime::TicketId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExitSurveyResponse::Table)
                    .if_not_exists()
                    .col(big_integer(ExitSurveyResponse::GuildId))
                    .col(integer(ExitSurveyResponse::TicketId))
                    .col(integer(ExitSurveyResponse::FormId))
                    .col(integer(ExitSurveyResponse::QuestionId))
                    .col(text(ExitSurveyResponse::Response))
                    .primary_key(
                        Index::create()
                            .col(ExitSurveyResponse::GuildId)
                            .col(ExitSurveyResponse::TicketId)
                            .col(ExitSurveyResponse::FormId)
                            .col(ExitSurveyResponse::QuestionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CloseReason::Table)
                    .if_not_exists()
                    .col(big_integer(CloseReason::GuildId))
                    .col(integer(CloseReason::TicketId))
                    .col(text_null(CloseReason::CloseReason))
                    .col(big_integer_null(CloseReason::ClosedBy))
                    .primary_key(
                        Index::create()
                            .col(CloseReason::GuildId)
                            .col(CloseReason::TicketId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AutocloseExcluded::Table)
                    .if_not_exists()
                    .col(big_integer(AutocloseExcluded::GuildId))
                    .col(integer(AutocloseExcluded::TicketId))
                    .primary_key(
                        Index::create()
                            .col(AutocloseExcluded::GuildId)
                            .col(AutocloseExcluded::TicketId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArchiveMessage::Table)
                    .if_not_exists()
                    .col(big_integer(ArchiveMessage::GuildId))
                    .col(integer(ArchiveMessage::TicketId))
                    .col(big_integer(ArchiveMessage::ChannelId))
                    .col(big_integer(ArchiveMessage::MessageId))
                    .primary_key(
                        Index::create()
                            .col(ArchiveMessage::GuildId)
                            .col(ArchiveMessage::TicketId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArchiveMessage::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AutocloseExcluded::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CloseReason::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ExitSurveyResponse::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FirstResponseTime::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Participant::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ServiceRating::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TicketClaim::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TicketLastMessage::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TicketMember::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    GuildId,
    Id,
    UserId,
    ChannelId,
    Open,
    OpenTime,
    WelcomeMessageId,
    PanelId,
    HasTranscript,
    CloseTime,
    IsThread,
    JoinMessageId,
    NotesThreadId,
}

#[derive(DeriveIden)]
pub enum TicketMember {
    Table,
    GuildId,
    TicketId,
    UserId,
}

#[derive(DeriveIden)]
pub enum TicketLastMessage {
    Table,
    GuildId,
    TicketId,
    LastMessageId,
    LastMessageTime,
    UserId,
    UserIsStaff,
}

#[derive(DeriveIden)]
pub enum TicketClaim {
    Table,
    GuildId,
    TicketId,
    UserId,
}

#[derive(DeriveIden)]
pub enum ServiceRating {
    Table,
    GuildId,
    TicketId,
    Rating,
}

#[derive(DeriveIden)]
pub enum Participant {
    Table,
    GuildId,
    TicketId,
    UserId,
}

#[derive(DeriveIden)]
pub enum FirstResponseTime {
    Table,
    GuildId,
    TicketId,
    UserId,
    ResponseTimeMs,
}

#[derive(DeriveIden)]
pub enum ExitSurveyResponse {
    Table,
    GuildId,
    TicketId,
    FormId,
    QuestionId,
    Response,
}

#[derive(DeriveIden)]
pub enum CloseReason {
    Table,
    GuildId,
    TicketId,
    CloseReason,
    ClosedBy,
}

#[derive(DeriveIden)]
pub enum AutocloseExcluded {
    Table,
    GuildId,
    TicketId,
}

#[derive(DeriveIden)]
pub enum ArchiveMessage {
    Table,
    GuildId,
    TicketId,
    ChannelId,
    MessageId,
}
