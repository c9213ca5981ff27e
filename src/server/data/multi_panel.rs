use migration::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::{data::guild_setting::to_json, model::guild_data::MultiPanel};

pub struct MultiPanelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MultiPanelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a multi-panel without targets and returns its id.
    pub async fn create(&self, guild_id: u64, panel: &MultiPanel) -> Result<i32, DbErr> {
        let embed = panel.embed.as_ref().map(to_json).transpose()?;

        let created = entity::multi_panel::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            message_id: ActiveValue::Set(panel.message_id.get() as i64),
            channel_id: ActiveValue::Set(panel.channel_id.get() as i64),
            select_menu: ActiveValue::Set(panel.select_menu),
            embed: ActiveValue::Set(embed),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(created.id)
    }

    pub async fn add_target(&self, multi_panel_id: i32, panel_id: i32) -> Result<(), DbErr> {
        entity::prelude::MultiPanelTarget::insert(entity::multi_panel_target::ActiveModel {
            multi_panel_id: ActiveValue::Set(multi_panel_id),
            panel_id: ActiveValue::Set(panel_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::multi_panel_target::Column::MultiPanelId,
                entity::multi_panel_target::Column::PanelId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
