use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Embed::Table)
                    .if_not_exists()
                    .col(pk_auto(Embed::Id))
                    .col(big_integer(Embed::GuildId))
                    .col(string_null(Embed::Title))
                    .col(text_null(Embed::Description))
                    .col(string_null(Embed::Url))
                    .col(integer(Embed::Colour))
                    .col(string_null(Embed::AuthorName))
                    .col(string_null(Embed::AuthorIconUrl))
                    .col(string_null(Embed::AuthorUrl))
                    .col(string_null(Embed::ImageUrl))
                    .col(string_null(Embed::ThumbnailUrl))
                    .col(string_null(Embed::FooterText))
                    .col(string_null(Embed::FooterIconUrl))
                    .col(timestamp_with_time_zone_null(Embed::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmbedField::Table)
                    .if_not_exists()
                    .col(pk_auto(EmbedField::Id))
                    .col(integer(EmbedField::EmbedId))
                    .col(string(EmbedField::Name))
                    .col(text(EmbedField::Value))
                    .col(boolean(EmbedField::Inline))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_embed_field_embed_id")
                            .from(EmbedField::Table, EmbedField::EmbedId)
                            .to(Embed::Table, Embed::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmbedField::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Embed::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Embed {
    Table,
    Id,
    GuildId,
    Title,
    Description,
    Url,
    Colour,
    AuthorName,
    AuthorIconUrl,
    AuthorUrl,
    ImageUrl,
    ThumbnailUrl,
    FooterText,
    FooterIconUrl,
    Timestamp,
}

#[derive(DeriveIden)]
pub enum EmbedField {
    Table,
    Id,
    EmbedId,
    Name,
    Value,
    Inline,
}
