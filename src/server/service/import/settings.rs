use crate::server::{
    model::import::EntityClass,
    service::import::{
        report::ClassOutcome,
        stage::{ImportRun, StepFuture},
    },
};

/// Writes the guild settings document once panels exist.
///
/// The context-menu panel is remapped; it is cleared when its panel was not imported.
pub fn import_settings(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let Some(settings) = run.data.settings.as_ref() else {
            return Ok(vec![]);
        };

        let mut settings = settings.clone();
        settings.context_menu_panel = run
            .mappings
            .get(EntityClass::Panel)
            .resolve_lenient(settings.context_menu_panel);

        let result = run.store.set_settings(run.guild_id, &settings).await;

        Ok(vec![ClassOutcome::from_result("Settings", result)])
    })
}
