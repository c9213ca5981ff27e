use crate::server::{
    model::import::{CreateFormInputParams, EntityClass},
    service::import::{
        report::Tally,
        stage::{ImportRun, StepFuture},
        IMPORTED_SUFFIX,
    },
    util::custom_id::generate_custom_id,
};

/// Creates forms under fresh custom ids so they never collide with the source guild's.
pub fn import_forms(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut forms = Tally::new("Forms");
        for form in &data.forms {
            if run.mappings.get(EntityClass::Form).is_mapped(form.id) {
                forms.skipped();
                continue;
            }

            let title = format!("{}{}", form.title, IMPORTED_SUFFIX);
            match store
                .create_form(run.guild_id, &title, &generate_custom_id())
                .await
            {
                Ok(new_id) => {
                    run.record_mapping(EntityClass::Form, form.id, new_id).await?;
                    forms.created();
                }
                Err(e) => {
                    run.mappings.get_mut(EntityClass::Form).mark_unavailable(form.id);
                    forms.failed(e);
                }
            }
        }

        Ok(vec![forms.finish()])
    })
}

/// Creates form inputs; inputs of forms that were not created are skipped.
pub fn import_form_inputs(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut inputs = Tally::new("Form Inputs");
        for input in &data.form_inputs {
            if run.mappings.get(EntityClass::FormInput).is_mapped(input.id) {
                inputs.skipped();
                continue;
            }

            let Some(form_id) = run.mappings.get(EntityClass::Form).resolve_required(input.form_id)
            else {
                run.mappings
                    .get_mut(EntityClass::FormInput)
                    .mark_unavailable(input.id);
                inputs.skipped();
                continue;
            };

            let params = CreateFormInputParams {
                form_id,
                position: input.position,
                custom_id: generate_custom_id(),
                style: input.style,
                label: input.label.clone(),
                description: input.description.clone(),
                placeholder: input.placeholder.clone(),
                required: input.required,
                min_length: input.min_length,
                max_length: input.max_length,
            };
            match store.create_form_input(params).await {
                Ok(new_id) => {
                    run.record_mapping(EntityClass::FormInput, input.id, new_id)
                        .await?;
                    inputs.created();
                }
                Err(e) => {
                    run.mappings
                        .get_mut(EntityClass::FormInput)
                        .mark_unavailable(input.id);
                    inputs.failed(e);
                }
            }
        }

        Ok(vec![inputs.finish()])
    })
}
