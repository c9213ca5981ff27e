use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildEntitlement::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildEntitlement::Id))
                    .col(big_integer(GuildEntitlement::GuildId))
                    .col(string(GuildEntitlement::Tier))
                    .col(timestamp_with_time_zone_null(GuildEntitlement::ExpiresAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildEntitlement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildEntitlement {
    Table,
    Id,
    GuildId,
    Tier,
    ExpiresAt,
}
