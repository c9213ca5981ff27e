use crate::server::{
    model::{guild_data::EmbedField, import::EntityClass},
    service::import::{
        report::Tally,
        stage::{ImportRun, StepFuture},
    },
};

/// Creates custom embeds together with their fields.
pub fn import_embeds(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut embeds = Tally::new("Embeds");
        for embed in &data.embeds {
            if run.mappings.get(EntityClass::Embed).is_mapped(embed.id) {
                embeds.skipped();
                continue;
            }

            let fields: Vec<EmbedField> = data
                .embed_fields
                .iter()
                .filter(|field| field.embed_id == embed.id)
                .cloned()
                .collect();

            match store.create_embed(run.guild_id, embed, &fields).await {
                Ok(new_id) => {
                    run.record_mapping(EntityClass::Embed, embed.id, new_id)
                        .await?;
                    embeds.created();
                }
                Err(e) => {
                    run.mappings.get_mut(EntityClass::Embed).mark_unavailable(embed.id);
                    embeds.failed(e);
                }
            }
        }

        Ok(vec![embeds.finish()])
    })
}
