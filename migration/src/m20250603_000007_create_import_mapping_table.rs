use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImportMapping::Table)
                    .if_not_exists()
                    .col(big_integer(ImportMapping::GuildId))
                    .col(string(ImportMapping::Area))
                    .col(integer(ImportMapping::SourceId))
                    .col(integer(ImportMapping::TargetId))
                    .primary_key(
                        Index::create()
                            .col(ImportMapping::GuildId)
                            .col(ImportMapping::Area)
                            .col(ImportMapping::SourceId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImportMapping::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ImportMapping {
    Table,
    GuildId,
    Area,
    SourceId,
    TargetId,
}
