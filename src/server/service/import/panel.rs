use std::sync::Arc;

use crate::server::{
    model::{
        guild_data::Panel,
        import::{snowflakes, AccessControlRuleParams, CreatePanelParams, EntityClass},
        premium::PremiumTier,
    },
    service::import::{
        mapping::RunMappings,
        report::Tally,
        stage::{ImportRun, StepFuture, Unit, UnitContext, UnitFuture},
        IMPORTED_SUFFIX,
    },
    util::custom_id::generate_custom_id,
};

/// Panels a guild without premium may have before imported panels are disabled.
pub const FREE_PANEL_LIMIT: u64 = 2;

/// Creates panels inside one transaction.
///
/// Mappings are only recorded once the transaction committed; if the commit fails every
/// panel created in it is reported failed and nothing is mapped.
pub fn import_panels(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut tally = Tally::new("Panels");
        if data.panels.is_empty() {
            return Ok(vec![tally.finish()]);
        }

        let mut panel_count = store.count_panels(run.guild_id).await?;
        let mut batch = store.begin_panel_batch().await?;
        let mut created: Vec<(i32, i32)> = Vec::new();

        for panel in &data.panels {
            if run.mappings.get(EntityClass::Panel).is_mapped(panel.panel_id) {
                tally.skipped();
                continue;
            }

            let Some(mut params) = panel_params(run.guild_id, panel, &run.mappings) else {
                run.mappings
                    .get_mut(EntityClass::Panel)
                    .mark_unavailable(panel.panel_id);
                tally.skipped();
                continue;
            };

            if exceeds_free_limit(run.premium_tier, panel_count) {
                params.force_disabled = true;
                params.disabled = true;
            }

            match batch.create(params).await {
                Ok(new_id) => {
                    created.push((panel.panel_id, new_id));
                    panel_count += 1;
                }
                Err(e) => {
                    run.mappings
                        .get_mut(EntityClass::Panel)
                        .mark_unavailable(panel.panel_id);
                    tally.failed(e);
                }
            }
        }

        match batch.commit().await {
            Ok(()) => {
                for (source_id, target_id) in created {
                    run.record_mapping(EntityClass::Panel, source_id, target_id)
                        .await?;
                    tally.created();
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to commit {} imported panels for guild {}: {}",
                    created.len(),
                    run.guild_id,
                    e
                );
                for (source_id, _) in &created {
                    run.mappings
                        .get_mut(EntityClass::Panel)
                        .mark_unavailable(*source_id);
                }
                tally.failed_many(created.len());
            }
        }

        Ok(vec![tally.finish()])
    })
}

/// Whether a panel created after `existing` others must be disabled.
pub fn exceeds_free_limit(tier: PremiumTier, existing: u64) -> bool {
    !tier.is_premium() && existing > FREE_PANEL_LIMIT
}

/// Builds the creation parameters, or `None` when a referenced form or embed failed.
fn panel_params(
    guild_id: u64,
    panel: &Panel,
    mappings: &RunMappings,
) -> Option<CreatePanelParams> {
    let form_id = mappings
        .get(EntityClass::Form)
        .resolve_optional(panel.form_id)
        .ok()?;
    let exit_survey_form_id = mappings
        .get(EntityClass::Form)
        .resolve_optional(panel.exit_survey_form_id)
        .ok()?;
    let welcome_message_embed = mappings
        .get(EntityClass::Embed)
        .resolve_optional(panel.welcome_message_embed)
        .ok()?;

    // The source panel's message stays owned by the exporting installation.
    Some(CreatePanelParams {
        guild_id,
        message_id: panel.message_id.get().saturating_sub(1),
        channel_id: panel.channel_id.get(),
        title: format!("{}{}", panel.title, IMPORTED_SUFFIX),
        content: panel.content.clone(),
        colour: panel.colour,
        target_category: panel.target_category.get(),
        emoji_name: panel.emoji_name.clone(),
        emoji_id: panel.emoji_id.map(|id| id.get()),
        welcome_message_embed,
        with_default_team: panel.with_default_team,
        custom_id: generate_custom_id(),
        image_url: panel.image_url.clone(),
        thumbnail_url: panel.thumbnail_url.clone(),
        button_style: panel.button_style,
        button_label: panel.button_label.clone(),
        form_id,
        naming_scheme: panel.naming_scheme.clone(),
        force_disabled: panel.force_disabled,
        disabled: panel.disabled,
        exit_survey_form_id,
        pending_category: panel.pending_category.map(|id| id.get()),
    })
}

/// Panel sub-tables, which only depend on panels and support teams.
pub fn settings_units() -> Vec<Unit> {
    vec![
        Unit {
            label: "Panel Access Control Rules",
            run: access_control_rules,
        },
        Unit {
            label: "Panel Mention User",
            run: mention_user,
        },
        Unit {
            label: "Panel Role Mentions",
            run: role_mentions,
        },
        Unit {
            label: "Panel Teams",
            run: panel_teams,
        },
    ]
}

fn access_control_rules(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let panels = ctx.mappings.get(EntityClass::Panel);

        let mut tally = Tally::new("Panel Access Control Rules");
        for (panel_id, rules) in &ctx.data.panel_access_control_rules {
            let Some(new_panel_id) = panels.resolve_required(*panel_id) else {
                tally.skipped();
                continue;
            };

            let rules = rules
                .iter()
                .map(|rule| AccessControlRuleParams {
                    role_id: rule.role_id.get(),
                    action: rule.action,
                })
                .collect();
            tally.record(
                ctx.store
                    .set_panel_access_control_rules(new_panel_id, rules)
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

fn mention_user(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let panels = ctx.mappings.get(EntityClass::Panel);

        let mut tally = Tally::new("Panel Mention User");
        for (panel_id, should_mention) in &ctx.data.panel_mention_user {
            let Some(new_panel_id) = panels.resolve_required(*panel_id) else {
                tally.skipped();
                continue;
            };

            tally.record(
                ctx.store
                    .set_panel_mention_user(new_panel_id, *should_mention)
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

fn role_mentions(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let panels = ctx.mappings.get(EntityClass::Panel);

        let mut tally = Tally::new("Panel Role Mentions");
        for (panel_id, roles) in &ctx.data.panel_role_mentions {
            let Some(new_panel_id) = panels.resolve_required(*panel_id) else {
                tally.skipped_many(roles.len());
                continue;
            };

            for role_id in snowflakes(roles) {
                tally.record(ctx.store.add_panel_role_mention(new_panel_id, role_id).await);
            }
        }

        vec![tally.finish()]
    })
}

/// Team assignments referencing teams that were not imported are dropped.
fn panel_teams(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let panels = ctx.mappings.get(EntityClass::Panel);
        let teams = ctx.mappings.get(EntityClass::SupportTeam);

        let mut tally = Tally::new("Panel Teams");
        for (panel_id, team_ids) in &ctx.data.panel_teams {
            let Some(new_panel_id) = panels.resolve_required(*panel_id) else {
                tally.skipped();
                continue;
            };

            let new_team_ids = team_ids
                .iter()
                .filter_map(|team_id| teams.resolve_required(*team_id))
                .collect();
            tally.record(ctx.store.set_panel_teams(new_panel_id, new_team_ids).await);
        }

        vec![tally.finish()]
    })
}
