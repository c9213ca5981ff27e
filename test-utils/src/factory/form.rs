//! Form factory for creating test form and form input entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a form for the guild with a unique title and custom id.
pub async fn create_form(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::form::Model, DbErr> {
    let id = next_id();

    entity::form::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        title: ActiveValue::Set(format!("Form {}", id)),
        custom_id: ActiveValue::Set(format!("form-{}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a short text input on the given form.
pub async fn create_form_input(
    db: &DatabaseConnection,
    form_id: i32,
    position: i32,
) -> Result<entity::form_input::Model, DbErr> {
    let id = next_id();

    entity::form_input::ActiveModel {
        form_id: ActiveValue::Set(form_id),
        position: ActiveValue::Set(position),
        custom_id: ActiveValue::Set(format!("input-{}", id)),
        style: ActiveValue::Set(1),
        label: ActiveValue::Set(format!("Question {}", id)),
        description: ActiveValue::Set(None),
        placeholder: ActiveValue::Set(None),
        required: ActiveValue::Set(true),
        min_length: ActiveValue::Set(None),
        max_length: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
