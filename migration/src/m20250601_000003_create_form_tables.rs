use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Form::Table)
                    .if_not_exists()
                    .col(pk_auto(Form::Id))
                    .col(big_integer(Form::GuildId))
                    .col(string(Form::Title))
                    .col(string(Form::CustomId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormInput::Table)
                    .if_not_exists()
                    .col(pk_auto(FormInput::Id))
                    .col(integer(FormInput::FormId))
                    .col(integer(FormInput::Position))
                    .col(string(FormInput::CustomId))
                    .col(small_integer(FormInput::Style))
                    .col(string(FormInput::Label))
                    .col(string_null(FormInput::Description))
                    .col(string_null(FormInput::Placeholder))
                    .col(boolean(FormInput::Required))
                    .col(integer_null(FormInput::MinLength))
                    .col(integer_null(FormInput::MaxLength))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_input_form_id")
                            .from(FormInput::Table, FormInput::FormId)
                            .to(Form::Table, Form::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormInput::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Form::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Form {
    Table,
    Id,
    GuildId,
    Title,
    CustomId,
}

#[derive(DeriveIden)]
pub enum FormInput {
    Table,
    Id,
    FormId,
    Position,
    CustomId,
    Style,
    Label,
    Description,
    Placeholder,
    Required,
    MinLength,
    MaxLength,
}
