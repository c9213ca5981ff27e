use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{data::guild_setting::to_json, model::guild_data::Tag};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag, replacing the content of an existing tag with the same name.
    pub async fn upsert(&self, guild_id: u64, tag: &Tag) -> Result<(), DbErr> {
        let embed = tag.embed.as_ref().map(to_json).transpose()?;

        entity::prelude::Tag::insert(entity::tag::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            tag_id: ActiveValue::Set(tag.id.clone()),
            content: ActiveValue::Set(tag.content.clone()),
            embed: ActiveValue::Set(embed),
        })
        .on_conflict(
            OnConflict::columns([entity::tag::Column::GuildId, entity::tag::Column::TagId])
                .update_columns([entity::tag::Column::Content, entity::tag::Column::Embed])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
