use crate::server::{
    model::import::EntityClass,
    service::import::{
        report::Tally,
        stage::{ImportRun, StepFuture},
        IMPORTED_SUFFIX,
    },
};

/// Creates support teams, then adds their members and roles.
pub fn import_support_teams(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut teams = Tally::new("Support Teams");
        for team in &data.support_teams {
            if run.mappings.get(EntityClass::SupportTeam).is_mapped(team.id) {
                teams.skipped();
                continue;
            }

            let name = format!("{}{}", team.name, IMPORTED_SUFFIX);
            match store.create_support_team(run.guild_id, &name).await {
                Ok(new_id) => {
                    run.record_mapping(EntityClass::SupportTeam, team.id, new_id)
                        .await?;
                    teams.created();
                }
                Err(e) => {
                    run.mappings
                        .get_mut(EntityClass::SupportTeam)
                        .mark_unavailable(team.id);
                    teams.failed(e);
                }
            }
        }

        let team_ids = run.mappings.get(EntityClass::SupportTeam);

        let mut users = Tally::new("Support Team Users");
        for (team_id, members) in &data.support_team_users {
            let Some(new_team_id) = team_ids.resolve_required(*team_id) else {
                users.skipped_many(members.len());
                continue;
            };
            for user in members {
                users.record(store.add_team_member(new_team_id, user.get()).await);
            }
        }

        let mut roles = Tally::new("Support Team Roles");
        for (team_id, team_roles) in &data.support_team_roles {
            let Some(new_team_id) = team_ids.resolve_required(*team_id) else {
                roles.skipped_many(team_roles.len());
                continue;
            };
            for role in team_roles {
                roles.record(store.add_team_role(new_team_id, role.get()).await);
            }
        }

        Ok(vec![teams.finish(), users.finish(), roles.finish()])
    })
}
