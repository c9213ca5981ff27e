use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTeam::Id))
                    .col(big_integer(SupportTeam::GuildId))
                    .col(string(SupportTeam::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportTeamMember::Table)
                    .if_not_exists()
                    .col(integer(SupportTeamMember::TeamId))
                    .col(big_integer(SupportTeamMember::UserId))
                    .primary_key(
                        Index::create()
                            .col(SupportTeamMember::TeamId)
                            .col(SupportTeamMember::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_team_member_team_id")
                            .from(SupportTeamMember::Table, SupportTeamMember::TeamId)
                            .to(SupportTeam::Table, SupportTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SupportTeamRole::Table)
                    .if_not_exists()
                    .col(integer(SupportTeamRole::TeamId))
                    .col(big_integer(SupportTeamRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(SupportTeamRole::TeamId)
                            .col(SupportTeamRole::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_team_role_team_id")
                            .from(SupportTeamRole::Table, SupportTeamRole::TeamId)
                            .to(SupportTeam::Table, SupportTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupportTeamRole::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SupportTeamMember::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(SupportTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupportTeam {
    Table,
    Id,
    GuildId,
    Name,
}

#[derive(DeriveIden)]
pub enum SupportTeamMember {
    Table,
    TeamId,
    UserId,
}

#[derive(DeriveIden)]
pub enum SupportTeamRole {
    Table,
    TeamId,
    RoleId,
}
