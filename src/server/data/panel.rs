//! Panel repository.
//!
//! Generic over the connection so panels can be created inside the import's panel
//! transaction as well as directly on the pool.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionSession, TransactionTrait,
};

use crate::server::model::import::{AccessControlRuleParams, CreatePanelParams};

pub struct PanelRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> PanelRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts the panels of a guild.
    pub async fn count_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Panel::find()
            .filter(entity::panel::Column::GuildId.eq(guild_id as i64))
            .count(self.db)
            .await
    }

    /// Creates a panel and returns its id.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created panel
    /// - `Err(DbErr)` - Database error, including a custom id collision
    pub async fn create(&self, params: CreatePanelParams) -> Result<i32, DbErr> {
        let panel = entity::panel::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id as i64),
            message_id: ActiveValue::Set(params.message_id as i64),
            channel_id: ActiveValue::Set(params.channel_id as i64),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            colour: ActiveValue::Set(params.colour),
            target_category: ActiveValue::Set(params.target_category as i64),
            emoji_name: ActiveValue::Set(params.emoji_name),
            emoji_id: ActiveValue::Set(params.emoji_id.map(|id| id as i64)),
            welcome_message_embed: ActiveValue::Set(params.welcome_message_embed),
            with_default_team: ActiveValue::Set(params.with_default_team),
            custom_id: ActiveValue::Set(params.custom_id),
            image_url: ActiveValue::Set(params.image_url),
            thumbnail_url: ActiveValue::Set(params.thumbnail_url),
            button_style: ActiveValue::Set(params.button_style),
            button_label: ActiveValue::Set(params.button_label),
            form_id: ActiveValue::Set(params.form_id),
            naming_scheme: ActiveValue::Set(params.naming_scheme),
            force_disabled: ActiveValue::Set(params.force_disabled),
            disabled: ActiveValue::Set(params.disabled),
            exit_survey_form_id: ActiveValue::Set(params.exit_survey_form_id),
            pending_category: ActiveValue::Set(params.pending_category.map(|id| id as i64)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(panel.id)
    }

    /// Replaces the access control rules of a panel, keeping their order.
    pub async fn set_access_control_rules(
        &self,
        panel_id: i32,
        rules: Vec<AccessControlRuleParams>,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PanelAccessControlRule::delete_many()
            .filter(entity::panel_access_control_rule::Column::PanelId.eq(panel_id))
            .exec(&txn)
            .await?;

        if !rules.is_empty() {
            let models = rules.into_iter().enumerate().map(|(position, rule)| {
                entity::panel_access_control_rule::ActiveModel {
                    panel_id: ActiveValue::Set(panel_id),
                    role_id: ActiveValue::Set(rule.role_id as i64),
                    action: ActiveValue::Set(rule.action.as_str().to_string()),
                    position: ActiveValue::Set(position as i32),
                }
            });
            entity::prelude::PanelAccessControlRule::insert_many(models)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await
    }

    pub async fn set_mention_user(&self, panel_id: i32, should_mention: bool) -> Result<(), DbErr> {
        entity::prelude::PanelUserMention::insert(entity::panel_user_mention::ActiveModel {
            panel_id: ActiveValue::Set(panel_id),
            should_mention: ActiveValue::Set(should_mention),
        })
        .on_conflict(
            OnConflict::column(entity::panel_user_mention::Column::PanelId)
                .update_column(entity::panel_user_mention::Column::ShouldMention)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn add_role_mention(&self, panel_id: i32, role_id: u64) -> Result<(), DbErr> {
        entity::prelude::PanelRoleMention::insert(entity::panel_role_mention::ActiveModel {
            panel_id: ActiveValue::Set(panel_id),
            role_id: ActiveValue::Set(role_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::panel_role_mention::Column::PanelId,
                entity::panel_role_mention::Column::RoleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Replaces the support teams assigned to a panel.
    pub async fn set_teams(&self, panel_id: i32, team_ids: Vec<i32>) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PanelTeam::delete_many()
            .filter(entity::panel_team::Column::PanelId.eq(panel_id))
            .exec(&txn)
            .await?;

        if !team_ids.is_empty() {
            let models = team_ids
                .into_iter()
                .map(|team_id| entity::panel_team::ActiveModel {
                    panel_id: ActiveValue::Set(panel_id),
                    team_id: ActiveValue::Set(team_id),
                });
            entity::prelude::PanelTeam::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        entity::panel_team::Column::PanelId,
                        entity::panel_team::Column::TeamId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await
    }
}
