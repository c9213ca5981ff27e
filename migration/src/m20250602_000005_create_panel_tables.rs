use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Panel::Table)
                    .if_not_exists()
                    .col(pk_auto(Panel::Id))
                    .col(big_integer(Panel::GuildId))
                    .col(big_integer(Panel::MessageId))
                    .col(big_integer(Panel::ChannelId))
                    .col(string(Panel::Title))
                    .col(text(Panel::Content))
                    .col(integer(Panel::Colour))
                    .col(big_integer(Panel::TargetCategory))
                    .col(string_null(Panel::EmojiName))
                    .col(big_integer_null(Panel::EmojiId))
                    .col(integer_null(Panel::WelcomeMessageEmbed))
                    .col(boolean(Panel::WithDefaultTeam))
                    .col(string(Panel::CustomId))
                    .col(string_null(Panel::ImageUrl))
                    .col(string_null(Panel::ThumbnailUrl))
                    .col(small_integer(Panel::ButtonStyle))
                    .col(string(Panel::ButtonLabel))
                    .col(integer_null(Panel::FormId))
                    .col(string_null(Panel::NamingScheme))
                    .col(boolean(Panel::ForceDisabled).default(false))
                    .col(boolean(Panel::Disabled).default(false))
                    .col(integer_null(Panel::ExitSurveyFormId))
                    .col(big_integer_null(Panel::PendingCategory))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PanelAccessControlRule::Table)
                    .if_not_exists()
                    .col(integer(PanelAccessControlRule::PanelId))
                    .col(big_integer(PanelAccessControlRule::RoleId))
                    .col(string(PanelAccessControlRule::Action))
                    .col(integer(PanelAccessControlRule::Position))
                    .primary_key(
                        Index::create()
                            .col(PanelAccessControlRule::PanelId)
                            .col(PanelAccessControlRule::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_access_control_rule_panel_id")
                            .from(PanelAccessControlRule::Table, PanelAccessControlRule::PanelId)
                            .to(Panel::Table, Panel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PanelUserMention::Table)
                    .if_not_exists()
                    .col(integer(PanelUserMention::PanelId).primary_key())
                    .col(boolean(PanelUserMention::ShouldMention))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_user_mention_panel_id")
                            .from(PanelUserMention::Table, PanelUserMention::PanelId)
                            .to(Panel::Table, Panel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PanelRoleMention::Table)
                    .if_not_exists()
                    .col(integer(PanelRoleMention::PanelId))
                    .col(big_integer(PanelRoleMention::RoleId))
                    .primary_key(
                        Index::create()
                            .col(PanelRoleMention::PanelId)
                            .col(PanelRoleMention::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_role_mention_panel_id")
                            .from(PanelRoleMention::Table, PanelRoleMention::PanelId)
                            .to(Panel::Table, Panel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PanelTeam::Table)
                    .if_not_exists()
                    .col(integer(PanelTeam::PanelId))
                    .col(integer(PanelTeam::TeamId))
                    .primary_key(
                        Index::create()
                            .col(PanelTeam::PanelId)
                            .col(PanelTeam::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panel_team_panel_id")
                            .from(PanelTeam::Table, PanelTeam::PanelId)
                            .to(Panel::Table, Panel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MultiPanel::Table)
                    .if_not_exists()
                    .col(pk_auto(MultiPanel::Id))
                    .col(big_integer(MultiPanel::GuildId))
                    .col(big_integer(MultiPanel::MessageId))
                    .col(big_integer(MultiPanel::ChannelId))
                    .col(boolean(MultiPanel::SelectMenu))
                    .col(text_null(MultiPanel::Embed))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MultiPanelTarget::Table)
                    .if_not_exists()
                    .col(integer(MultiPanelTarget::MultiPanelId))
                    .col(integer(MultiPanelTarget::PanelId))
                    .primary_key(
                        Index::create()
                            .col(MultiPanelTarget::MultiPanelId)
                            .col(MultiPanelTarget::PanelId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_multi_panel_target_multi_panel_id")
                            .from(MultiPanelTarget::Table, MultiPanelTarget::MultiPanelId)
                            .to(MultiPanel::Table, MultiPanel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_multi_panel_target_panel_id")
                            .from(MultiPanelTarget::Table, MultiPanelTarget::PanelId)
                            .to(Panel::Table, Panel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MultiPanelTarget::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MultiPanel::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PanelTeam::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PanelRoleMention::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PanelUserMention::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PanelAccessControlRule::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Panel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Panel {
    Table,
    Id,
    GuildId,
    MessageId,
    ChannelId,
    Title,
    Content,
    Colour,
    TargetCategory,
    EmojiName,
    EmojiId,
    WelcomeMessageEmbed,
    WithDefaultTeam,
    CustomId,
    ImageUrl,
    ThumbnailUrl,
    ButtonStyle,
    ButtonLabel,
    FormId,
    NamingScheme,
    ForceDisabled,
    Disabled,
    ExitSurveyFormId,
    PendingCategory,
}

#[derive(DeriveIden)]
pub enum PanelAccessControlRule {
    Table,
    PanelId,
    RoleId,
    Action,
    Position,
}

#[derive(DeriveIden)]
pub enum PanelUserMention {
    Table,
    PanelId,
    ShouldMention,
}

#[derive(DeriveIden)]
pub enum PanelRoleMention {
    Table,
    PanelId,
    RoleId,
}

#[derive(DeriveIden)]
pub enum PanelTeam {
    Table,
    PanelId,
    TeamId,
}

#[derive(DeriveIden)]
pub enum MultiPanel {
    Table,
    Id,
    GuildId,
    MessageId,
    ChannelId,
    SelectMenu,
    Embed,
}

#[derive(DeriveIden)]
pub enum MultiPanelTarget {
    Table,
    MultiPanelId,
    PanelId,
}
