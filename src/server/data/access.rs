//! Guild access repository: blacklists, on-call users and permission grants.
//!
//! Adding to a list is idempotent. Permission grants merge with the levels a user or role
//! already holds and never revoke one.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct GuildAccessRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildAccessRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_blacklisted_user(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::GuildBlacklistedUser::insert(entity::guild_blacklisted_user::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_blacklisted_user::Column::GuildId,
                entity::guild_blacklisted_user::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn add_blacklisted_role(&self, guild_id: u64, role_id: u64) -> Result<(), DbErr> {
        entity::prelude::GuildBlacklistedRole::insert(entity::guild_blacklisted_role::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            role_id: ActiveValue::Set(role_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::guild_blacklisted_role::Column::GuildId,
                entity::guild_blacklisted_role::Column::RoleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Blacklists the whole guild from the bot, replacing any previous reason.
    pub async fn set_server_blacklisted(&self, guild_id: u64, reason: &str) -> Result<(), DbErr> {
        entity::prelude::ServerBlacklist::insert(entity::server_blacklist::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            reason: ActiveValue::Set(Some(reason.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::server_blacklist::Column::GuildId)
                .update_column(entity::server_blacklist::Column::Reason)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn add_on_call_user(&self, guild_id: u64, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::OnCallUser::insert(entity::on_call_user::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::on_call_user::Column::GuildId,
                entity::on_call_user::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Grants support and/or admin to a user on top of what they already hold.
    pub async fn grant_user_permission(
        &self,
        guild_id: u64,
        user_id: u64,
        support: bool,
        admin: bool,
    ) -> Result<(), DbErr> {
        let existing =
            entity::prelude::UserPermission::find_by_id((guild_id as i64, user_id as i64))
                .one(self.db)
                .await?;
        let (support, admin) = match existing {
            Some(current) => (support || current.is_support, admin || current.is_admin),
            None => (support, admin),
        };

        entity::prelude::UserPermission::insert(entity::user_permission::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            user_id: ActiveValue::Set(user_id as i64),
            is_support: ActiveValue::Set(support),
            is_admin: ActiveValue::Set(admin),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_permission::Column::GuildId,
                entity::user_permission::Column::UserId,
            ])
            .update_columns([
                entity::user_permission::Column::IsSupport,
                entity::user_permission::Column::IsAdmin,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Grants support and/or admin to a role on top of what it already holds.
    pub async fn grant_role_permission(
        &self,
        guild_id: u64,
        role_id: u64,
        support: bool,
        admin: bool,
    ) -> Result<(), DbErr> {
        let existing =
            entity::prelude::RolePermission::find_by_id((guild_id as i64, role_id as i64))
                .one(self.db)
                .await?;
        let (support, admin) = match existing {
            Some(current) => (support || current.is_support, admin || current.is_admin),
            None => (support, admin),
        };

        entity::prelude::RolePermission::insert(entity::role_permission::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            role_id: ActiveValue::Set(role_id as i64),
            is_support: ActiveValue::Set(support),
            is_admin: ActiveValue::Set(admin),
        })
        .on_conflict(
            OnConflict::columns([
                entity::role_permission::Column::GuildId,
                entity::role_permission::Column::RoleId,
            ])
            .update_columns([
                entity::role_permission::Column::IsSupport,
                entity::role_permission::Column::IsAdmin,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
