use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::model::guild_data::{CustomEmbed, EmbedField};

pub struct EmbedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmbedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an embed together with its fields and returns the embed's id.
    ///
    /// The embed and its fields are written in one transaction; a failing field leaves
    /// nothing behind.
    pub async fn create(
        &self,
        guild_id: u64,
        embed: &CustomEmbed,
        fields: &[EmbedField],
    ) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;

        let created = entity::embed::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            title: ActiveValue::Set(embed.title.clone()),
            description: ActiveValue::Set(embed.description.clone()),
            url: ActiveValue::Set(embed.url.clone()),
            colour: ActiveValue::Set(embed.colour),
            author_name: ActiveValue::Set(embed.author_name.clone()),
            author_icon_url: ActiveValue::Set(embed.author_icon_url.clone()),
            author_url: ActiveValue::Set(embed.author_url.clone()),
            image_url: ActiveValue::Set(embed.image_url.clone()),
            thumbnail_url: ActiveValue::Set(embed.thumbnail_url.clone()),
            footer_text: ActiveValue::Set(embed.footer_text.clone()),
            footer_icon_url: ActiveValue::Set(embed.footer_icon_url.clone()),
            timestamp: ActiveValue::Set(embed.timestamp),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for field in fields {
            entity::embed_field::ActiveModel {
                embed_id: ActiveValue::Set(created.id),
                name: ActiveValue::Set(field.name.clone()),
                value: ActiveValue::Set(field.value.clone()),
                inline: ActiveValue::Set(field.inline),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(created.id)
    }
}
