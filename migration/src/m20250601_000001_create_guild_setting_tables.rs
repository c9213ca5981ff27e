use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSetting::Table)
                    .if_not_exists()
                    .col(big_integer(GuildSetting::GuildId).primary_key())
                    .col(string_null(GuildSetting::Language))
                    .col(big_integer_null(GuildSetting::ArchiveChannel))
                    .col(big_integer_null(GuildSetting::ChannelCategory))
                    .col(boolean_null(GuildSetting::CloseConfirmation))
                    .col(boolean_null(GuildSetting::FeedbackEnabled))
                    .col(boolean_null(GuildSetting::UsersCanClose))
                    .col(small_integer_null(GuildSetting::TicketLimit))
                    .col(text_null(GuildSetting::WelcomeMessage))
                    .col(string_null(GuildSetting::NamingScheme))
                    .col(text_null(GuildSetting::Autoclose))
                    .col(text_null(GuildSetting::ClaimSettings))
                    .col(text_null(GuildSetting::TicketPermissions))
                    .col(text_null(GuildSetting::Metadata))
                    .col(text_null(GuildSetting::Settings))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomColour::Table)
                    .if_not_exists()
                    .col(big_integer(CustomColour::GuildId))
                    .col(small_integer(CustomColour::ColourId))
                    .col(integer(CustomColour::Value))
                    .primary_key(
                        Index::create()
                            .col(CustomColour::GuildId)
                            .col(CustomColour::ColourId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuildBlacklistedUser::Table)
                    .if_not_exists()
                    .col(big_integer(GuildBlacklistedUser::GuildId))
                    .col(big_integer(GuildBlacklistedUser::UserId))
                    .primary_key(
                        Index::create()
                            .col(GuildBlacklistedUser::GuildId)
                            .col(GuildBlacklistedUser::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuildBlacklistedRole::Table)
                    .if_not_exists()
                    .col(big_integer(GuildBlacklistedRole::GuildId))
                    .col(big_integer(GuildBlacklistedRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(GuildBlacklistedRole::GuildId)
                            .col(GuildBlacklistedRole::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OnCallUser::Table)
                    .if_not_exists()
                    .col(big_integer(OnCallUser::GuildId))
                    .col(big_integer(OnCallUser::UserId))
                    .primary_key(
                        Index::create()
                            .col(OnCallUser::GuildId)
                            .col(OnCallUser::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserPermission::Table)
                    .if_not_exists()
                    .col(big_integer(UserPermission::GuildId))
                    .col(big_integer(UserPermission::UserId))
                    .col(boolean(UserPermission::IsSupport).default(false))
                    .col(boolean(UserPermission::IsAdmin).default(false))
                    .primary_key(
                        Index::create()
                            .col(UserPermission::GuildId)
                            .col(UserPermission::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RolePermission::Table)
                    .if_not_exists()
                    .col(big_integer(RolePermission::GuildId))
                    .col(big_integer(RolePermission::RoleId))
                    .col(boolean(RolePermission::IsSupport).default(false))
                    .col(boolean(RolePermission::IsAdmin).default(false))
                    .primary_key(
                        Index::create()
                            .col(RolePermission::GuildId)
                            .col(RolePermission::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ServerBlacklist::Table)
                    .if_not_exists()
                    .col(big_integer(ServerBlacklist::GuildId).primary_key())
                    .col(string_null(ServerBlacklist::Reason))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(big_integer(Tag::GuildId))
                    .col(string(Tag::TagId))
                    .col(text_null(Tag::Content))
                    .col(text_null(Tag::Embed))
                    .primary_key(
                        Index::create()
                            .col(Tag::GuildId)
                            .col(Tag::TagId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ServerBlacklist::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RolePermission::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserPermission::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(OnCallUser::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GuildBlacklistedRole::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GuildBlacklistedUser::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CustomColour::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GuildSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSetting {
    Table,
    GuildId,
    Language,
    ArchiveChannel,
    ChannelCategory,
    CloseConfirmation,
    FeedbackEnabled,
    UsersCanClose,
    TicketLimit,
    WelcomeMessage,
    NamingScheme,
    Autoclose,
    ClaimSettings,
    TicketPermissions,
    Metadata,
    Settings,
}

#[derive(DeriveIden)]
pub enum CustomColour {
    Table,
    GuildId,
    ColourId,
    Value,
}

#[derive(DeriveIden)]
pub enum GuildBlacklistedUser {
    Table,
    GuildId,
    UserId,
}

#[derive(DeriveIden)]
pub enum GuildBlacklistedRole {
    Table,
    GuildId,
    RoleId,
}

#[derive(DeriveIden)]
pub enum OnCallUser {
    Table,
    GuildId,
    UserId,
}

#[derive(DeriveIden)]
pub enum UserPermission {
    Table,
    GuildId,
    UserId,
    IsSupport,
    IsAdmin,
}

#[derive(DeriveIden)]
pub enum RolePermission {
    Table,
    GuildId,
    RoleId,
    IsSupport,
    IsAdmin,
}

#[derive(DeriveIden)]
pub enum ServerBlacklist {
    Table,
    GuildId,
    Reason,
}

#[derive(DeriveIden)]
pub enum Tag {
    Table,
    GuildId,
    TagId,
    Content,
    Embed,
}
