use crate::server::{
    model::import::{EntityClass, ImportTicketParams},
    service::import::{
        report::Tally,
        stage::{ImportRun, StepFuture},
    },
};

/// Bulk-imports tickets not imported before.
///
/// Source ticket ids are shifted by the number of tickets the guild already has so that
/// imported tickets never collide with existing ones. The batch is written atomically and
/// mappings are recorded only after it succeeded.
pub fn import_tickets(run: &mut ImportRun) -> StepFuture<'_> {
    Box::pin(async move {
        let data = run.data.clone();
        let store = run.store.clone();

        let mut tally = Tally::new("Tickets");
        if data.tickets.is_empty() {
            return Ok(vec![tally.finish()]);
        }

        let offset = i32::try_from(store.count_tickets(run.guild_id).await?).unwrap_or(i32::MAX);
        let panels = run.mappings.get(EntityClass::Panel);
        let tickets_map = run.mappings.get(EntityClass::Ticket);

        let mut pending: Vec<(i32, ImportTicketParams)> = Vec::new();
        for ticket in &data.tickets {
            if tickets_map.is_mapped(ticket.id) {
                tally.skipped();
                continue;
            }

            let Some(new_id) = ticket.id.checked_add(offset) else {
                tally.failed(format!("ticket id {} overflows after offset", ticket.id));
                continue;
            };

            pending.push((
                ticket.id,
                ImportTicketParams {
                    id: new_id,
                    user_id: ticket.user_id.get(),
                    channel_id: ticket.channel_id.map(|id| id.get()),
                    open: ticket.open,
                    open_time: ticket.open_time,
                    welcome_message_id: ticket.welcome_message_id.map(|id| id.get()),
                    panel_id: panels.resolve_lenient(ticket.panel_id),
                    has_transcript: ticket.has_transcript,
                    close_time: ticket.close_time,
                    is_thread: ticket.is_thread,
                    join_message_id: ticket.join_message_id.map(|id| id.get()),
                    notes_thread_id: ticket.notes_thread_id.map(|id| id.get()),
                },
            ));
        }

        if pending.is_empty() {
            return Ok(vec![tally.finish()]);
        }

        let batch = pending.iter().map(|(_, params)| params.clone()).collect();
        match store.import_tickets(run.guild_id, batch).await {
            Ok(()) => {
                for (source_id, params) in pending {
                    run.record_mapping(EntityClass::Ticket, source_id, params.id)
                        .await?;
                    tally.created();
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to import {} tickets for guild {}: {}",
                    pending.len(),
                    run.guild_id,
                    e
                );
                for (source_id, _) in &pending {
                    run.mappings
                        .get_mut(EntityClass::Ticket)
                        .mark_unavailable(*source_id);
                }
                tally.failed_many(pending.len());
            }
        }

        Ok(vec![tally.finish()])
    })
}
