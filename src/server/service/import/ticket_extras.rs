//! Per-ticket side tables, imported concurrently once tickets are mapped.
//!
//! Every record is resolved through the ticket mapping, which holds tickets imported by
//! this run as well as by earlier runs. Records of tickets that were not imported are
//! skipped. All writes are idempotent, so re-running an import does not duplicate them.

use std::sync::Arc;

use chrono::Duration;

use crate::server::{
    model::import::{
        CloseReasonParams, EntityClass, ExitSurveyResponseParams, LastMessageParams,
    },
    service::import::{
        mapping::IdMap,
        report::{ClassOutcome, Tally},
        stage::{Unit, UnitContext, UnitFuture},
    },
};

pub fn units() -> Vec<Unit> {
    vec![
        Unit { label: "Ticket Additional Members", run: additional_members },
        Unit { label: "Ticket Last Messages", run: last_messages },
        Unit { label: "Ticket Claims", run: claims },
        Unit { label: "Ticket Ratings", run: ratings },
        Unit { label: "Ticket Participants", run: participants },
        Unit { label: "First Response Times", run: first_response_times },
        Unit { label: "Exit Survey Responses", run: exit_survey_responses },
        Unit { label: "Close Reasons", run: close_reasons },
        Unit { label: "Autoclose Excluded Tickets", run: autoclose_excluded },
        Unit { label: "Archive Messages", run: archive_messages },
    ]
}

/// Outcome of one bulk write covering `records` rows, `skipped` of which were left out.
fn bulk_outcome<E: std::fmt::Display>(
    label: &'static str,
    records: usize,
    skipped: usize,
    result: Result<(), E>,
) -> ClassOutcome {
    let mut tally = Tally::new(label);
    tally.skipped_many(skipped);
    match result {
        Ok(()) if records > 0 => tally.created(),
        Ok(()) => {}
        Err(e) => {
            tracing::warn!("Failed to import {} ({} records): {}", label, records, e);
            tally.failed_many(records);
        }
    }

    tally.finish()
}

/// Remaps `(ticket, value)` pairs, returning the remapped pairs and the skipped count.
fn remap_pairs<T: Copy>(
    tickets: &IdMap,
    pairs: impl IntoIterator<Item = (i32, T)>,
) -> (Vec<(i32, T)>, usize) {
    let mut mapped = Vec::new();
    let mut skipped = 0;
    for (ticket_id, value) in pairs {
        match tickets.resolve_required(ticket_id) {
            Some(new_ticket_id) => mapped.push((new_ticket_id, value)),
            None => skipped += 1,
        }
    }

    (mapped, skipped)
}

fn additional_members(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let members = ctx
            .data
            .ticket_additional_members
            .iter()
            .flat_map(|(ticket_id, users)| users.iter().map(|user| (*ticket_id, user.get())));
        let (members, skipped) = remap_pairs(ctx.mappings.get(EntityClass::Ticket), members);

        let count = members.len();
        let result = if members.is_empty() {
            Ok(())
        } else {
            ctx.store.import_ticket_members(ctx.guild_id, members).await
        };

        vec![bulk_outcome("Ticket Additional Members", count, skipped, result)]
    })
}

fn last_messages(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let tickets = ctx.mappings.get(EntityClass::Ticket);

        let mut skipped = 0;
        let mut messages = Vec::new();
        for record in &ctx.data.ticket_last_messages {
            let Some(ticket_id) = tickets.resolve_required(record.ticket_id) else {
                skipped += 1;
                continue;
            };
            messages.push(LastMessageParams {
                ticket_id,
                last_message_id: record.data.last_message_id.map(|id| id.get()),
                last_message_time: record.data.last_message_time,
                user_id: record.data.user_id.map(|id| id.get()),
                user_is_staff: record.data.user_is_staff,
            });
        }

        let count = messages.len();
        let result = if messages.is_empty() {
            Ok(())
        } else {
            ctx.store.import_last_messages(ctx.guild_id, messages).await
        };

        vec![bulk_outcome("Ticket Last Messages", count, skipped, result)]
    })
}

fn claims(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let claims = ctx
            .data
            .ticket_claims
            .iter()
            .map(|record| (record.ticket_id, record.data.get()));
        let (claims, skipped) = remap_pairs(ctx.mappings.get(EntityClass::Ticket), claims);

        let count = claims.len();
        let result = if claims.is_empty() {
            Ok(())
        } else {
            ctx.store.import_ticket_claims(ctx.guild_id, claims).await
        };

        vec![bulk_outcome("Ticket Claims", count, skipped, result)]
    })
}

fn ratings(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let ratings = ctx
            .data
            .service_ratings
            .iter()
            .map(|record| (record.ticket_id, record.data));
        let (ratings, skipped) = remap_pairs(ctx.mappings.get(EntityClass::Ticket), ratings);

        let count = ratings.len();
        let result = if ratings.is_empty() {
            Ok(())
        } else {
            ctx.store.import_service_ratings(ctx.guild_id, ratings).await
        };

        vec![bulk_outcome("Ticket Ratings", count, skipped, result)]
    })
}

fn participants(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let participants = ctx
            .data
            .participants
            .iter()
            .flat_map(|(ticket_id, users)| users.iter().map(|user| (*ticket_id, user.get())));
        let (participants, skipped) =
            remap_pairs(ctx.mappings.get(EntityClass::Ticket), participants);

        let count = participants.len();
        let result = if participants.is_empty() {
            Ok(())
        } else {
            ctx.store.import_participants(ctx.guild_id, participants).await
        };

        vec![bulk_outcome("Ticket Participants", count, skipped, result)]
    })
}

fn first_response_times(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let tickets = ctx.mappings.get(EntityClass::Ticket);

        let mut tally = Tally::new("First Response Times");
        for record in &ctx.data.first_response_times {
            let Some(ticket_id) = tickets.resolve_required(record.ticket_id) else {
                tally.skipped();
                continue;
            };

            let response_time = Duration::nanoseconds(record.response_time);
            tally.record(
                ctx.store
                    .set_first_response_time(
                        ctx.guild_id,
                        ticket_id,
                        record.user_id.get(),
                        response_time,
                    )
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

/// Responses are keyed by remapped form and question; incomplete records are skipped.
fn exit_survey_responses(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let tickets = ctx.mappings.get(EntityClass::Ticket);
        let forms = ctx.mappings.get(EntityClass::Form);
        let questions = ctx.mappings.get(EntityClass::FormInput);

        let mut tally = Tally::new("Exit Survey Responses");
        for record in &ctx.data.exit_survey_responses {
            let survey = &record.data;
            let resolved = tickets
                .resolve_required(record.ticket_id)
                .zip(survey.form_id.and_then(|id| forms.resolve_required(id)))
                .zip(survey.question_id.and_then(|id| questions.resolve_required(id)))
                .zip(survey.response.clone());

            let Some((((ticket_id, form_id), question_id), response)) = resolved else {
                tally.skipped();
                continue;
            };

            tally.record(
                ctx.store
                    .add_exit_survey_response(
                        ctx.guild_id,
                        ExitSurveyResponseParams {
                            ticket_id,
                            form_id,
                            question_id,
                            response,
                        },
                    )
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

fn close_reasons(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let tickets = ctx.mappings.get(EntityClass::Ticket);

        let mut tally = Tally::new("Close Reasons");
        for record in &ctx.data.close_reasons {
            let Some(ticket_id) = tickets.resolve_required(record.ticket_id) else {
                tally.skipped();
                continue;
            };

            let params = CloseReasonParams {
                ticket_id,
                reason: record.data.reason.clone(),
                closed_by: record.data.closed_by.map(|id| id.get()),
            };
            tally.record(ctx.store.set_close_reason(ctx.guild_id, params).await);
        }

        vec![tally.finish()]
    })
}

fn autoclose_excluded(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let tickets = ctx.mappings.get(EntityClass::Ticket);

        let mut tally = Tally::new("Autoclose Excluded Tickets");
        for source_id in &ctx.data.autoclose_excluded {
            let Some(ticket_id) = tickets.resolve_required(*source_id) else {
                tally.skipped();
                continue;
            };

            tally.record(ctx.store.add_autoclose_excluded(ctx.guild_id, ticket_id).await);
        }

        vec![tally.finish()]
    })
}

fn archive_messages(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let tickets = ctx.mappings.get(EntityClass::Ticket);

        let mut tally = Tally::new("Archive Messages");
        for record in &ctx.data.archive_messages {
            let Some(ticket_id) = tickets.resolve_required(record.ticket_id) else {
                tally.skipped();
                continue;
            };

            tally.record(
                ctx.store
                    .set_archive_message(
                        ctx.guild_id,
                        ticket_id,
                        record.data.channel_id.get(),
                        record.data.message_id.get(),
                    )
                    .await,
            );
        }

        vec![tally.finish()]
    })
}
