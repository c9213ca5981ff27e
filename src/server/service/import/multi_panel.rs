use crate::server::{
    model::import::EntityClass,
    service::import::{
        report::Tally,
        stage::{ImportRun, StepFuture},
    },
};

/// Creates multi-panels, then links them to their imported panels.
pub fn import_multi_panels(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut multi_panels = Tally::new("Multi Panels");
        for multi_panel in &data.multi_panels {
            if run.mappings.get(EntityClass::MultiPanel).is_mapped(multi_panel.id) {
                multi_panels.skipped();
                continue;
            }

            match store.create_multi_panel(run.guild_id, multi_panel).await {
                Ok(new_id) => {
                    run.record_mapping(EntityClass::MultiPanel, multi_panel.id, new_id)
                        .await?;
                    multi_panels.created();
                }
                Err(e) => {
                    run.mappings
                        .get_mut(EntityClass::MultiPanel)
                        .mark_unavailable(multi_panel.id);
                    multi_panels.failed(e);
                }
            }
        }

        let multi_panel_ids = run.mappings.get(EntityClass::MultiPanel);
        let panel_ids = run.mappings.get(EntityClass::Panel);

        let mut targets = Tally::new("Multi Panel Targets");
        for (multi_panel_id, panels) in &data.multi_panel_targets {
            let Some(new_multi_panel_id) = multi_panel_ids.resolve_required(*multi_panel_id) else {
                targets.skipped_many(panels.len());
                continue;
            };

            for panel_id in panels {
                let Some(new_panel_id) = panel_ids.resolve_required(*panel_id) else {
                    targets.skipped();
                    continue;
                };
                targets.record(
                    store
                        .add_multi_panel_target(new_multi_panel_id, new_panel_id)
                        .await,
                );
            }
        }

        Ok(vec![multi_panels.finish(), targets.finish()])
    })
}
