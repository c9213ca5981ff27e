use migration::OnConflict;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct SupportTeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportTeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a support team and returns its id.
    pub async fn create(&self, guild_id: u64, name: &str) -> Result<i32, DbErr> {
        let team = entity::support_team::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(team.id)
    }

    pub async fn add_member(&self, team_id: i32, user_id: u64) -> Result<(), DbErr> {
        entity::prelude::SupportTeamMember::insert(entity::support_team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::support_team_member::Column::TeamId,
                entity::support_team_member::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn add_role(&self, team_id: i32, role_id: u64) -> Result<(), DbErr> {
        entity::prelude::SupportTeamRole::insert(entity::support_team_role::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            role_id: ActiveValue::Set(role_id as i64),
        })
        .on_conflict(
            OnConflict::columns([
                entity::support_team_role::Column::TeamId,
                entity::support_team_role::Column::RoleId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
