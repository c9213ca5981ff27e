//! Form repository for ticket forms and their inputs.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::import::CreateFormInputParams;

pub struct FormRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a form and returns its id.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the form belongs to
    /// - `title` - Title shown on the modal
    /// - `custom_id` - Component custom id, unique across all guilds
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created form
    /// - `Err(DbErr)` - Database error, including a custom id collision
    pub async fn create(&self, guild_id: u64, title: &str, custom_id: &str) -> Result<i32, DbErr> {
        let form = entity::form::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            title: ActiveValue::Set(title.to_string()),
            custom_id: ActiveValue::Set(custom_id.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(form.id)
    }

    /// Creates a form input and returns its id.
    pub async fn create_input(&self, params: CreateFormInputParams) -> Result<i32, DbErr> {
        let input = entity::form_input::ActiveModel {
            form_id: ActiveValue::Set(params.form_id),
            position: ActiveValue::Set(params.position),
            custom_id: ActiveValue::Set(params.custom_id),
            style: ActiveValue::Set(params.style),
            label: ActiveValue::Set(params.label),
            description: ActiveValue::Set(params.description),
            placeholder: ActiveValue::Set(params.placeholder),
            required: ActiveValue::Set(params.required),
            min_length: ActiveValue::Set(params.min_length),
            max_length: ActiveValue::Set(params.max_length),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(input.id)
    }
}
