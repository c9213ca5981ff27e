//! Guild-wide settings, access lists and tags.
//!
//! None of these reference remapped ids, so every unit runs concurrently in the first
//! stage. Optional settings absent from the archive produce no outcome.

use std::sync::Arc;

use crate::server::service::import::{
    report::{ClassOutcome, Tally},
    stage::{Unit, UnitContext, UnitFuture},
};

const DEFAULT_LANGUAGE: &str = "en";

pub fn units() -> Vec<Unit> {
    vec![
        Unit { label: "Language", run: language },
        Unit { label: "Archive Channel", run: archive_channel },
        Unit { label: "Channel Category", run: channel_category },
        Unit { label: "Autoclose Settings", run: autoclose },
        Unit { label: "Blacklisted Users", run: blacklisted_users },
        Unit { label: "Claim Settings", run: claim_settings },
        Unit { label: "Close Confirmation", run: close_confirmation },
        Unit { label: "Custom Colours", run: custom_colours },
        Unit { label: "Feedback Enabled", run: feedback_enabled },
        Unit { label: "Guild Metadata", run: guild_metadata },
        Unit { label: "Naming Scheme", run: naming_scheme },
        Unit { label: "On Call Users", run: on_call_users },
        Unit { label: "User Permissions", run: user_permissions },
        Unit { label: "Guild Blacklisted Roles", run: blacklisted_roles },
        Unit { label: "Role Permissions", run: role_permissions },
        Unit { label: "Tags", run: tags },
        Unit { label: "Ticket Limit", run: ticket_limit },
        Unit { label: "Ticket Permissions", run: ticket_permissions },
        Unit { label: "Users Can Close", run: users_can_close },
        Unit { label: "Welcome Message", run: welcome_message },
    ]
}

fn language(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let language = ctx
            .data
            .active_language
            .as_deref()
            .unwrap_or(DEFAULT_LANGUAGE);
        let result = ctx.store.set_language(ctx.guild_id, language).await;

        vec![ClassOutcome::from_result("Language", result)]
    })
}

fn archive_channel(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(channel) = ctx.data.archive_channel else {
            return vec![];
        };
        let result = ctx
            .store
            .set_archive_channel(ctx.guild_id, Some(channel.get()))
            .await;

        vec![ClassOutcome::from_result("Archive Channel", result)]
    })
}

fn channel_category(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(category) = ctx.data.channel_category else {
            return vec![];
        };
        let result = ctx
            .store
            .set_channel_category(ctx.guild_id, category.get())
            .await;

        vec![ClassOutcome::from_result("Channel Category", result)]
    })
}

/// Automatic closing is a premium feature; it is imported disabled for other guilds.
fn autoclose(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(settings) = ctx.data.autoclose_settings.as_ref() else {
            return vec![];
        };

        let mut settings = settings.clone();
        if !ctx.premium_tier.is_premium() {
            settings.enabled = false;
        }
        let result = ctx.store.set_autoclose(ctx.guild_id, &settings).await;

        vec![ClassOutcome::from_result("Autoclose Settings", result)]
    })
}

fn blacklisted_users(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("Blacklisted Users");
        for user in &ctx.data.guild_blacklisted_users {
            tally.record(ctx.store.add_blacklisted_user(ctx.guild_id, user.get()).await);
        }

        vec![tally.finish()]
    })
}

fn claim_settings(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(settings) = ctx.data.claim_settings.as_ref() else {
            return vec![];
        };
        let result = ctx.store.set_claim_settings(ctx.guild_id, settings).await;

        vec![ClassOutcome::from_result("Claim Settings", result)]
    })
}

fn close_confirmation(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let result = ctx
            .store
            .set_close_confirmation(ctx.guild_id, ctx.data.close_confirmation_enabled)
            .await;

        vec![ClassOutcome::from_result("Close Confirmation", result)]
    })
}

/// Custom colours are a premium feature and are not imported for other guilds.
fn custom_colours(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("Custom Colours");
        if !ctx.premium_tier.is_premium() {
            tally.skipped_many(ctx.data.custom_colors.len());
            return vec![tally.finish()];
        }

        for (colour_id, value) in &ctx.data.custom_colors {
            tally.record(
                ctx.store
                    .set_custom_colour(ctx.guild_id, *colour_id, *value)
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

fn feedback_enabled(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let result = ctx
            .store
            .set_feedback_enabled(ctx.guild_id, ctx.data.feedback_enabled)
            .await;

        vec![ClassOutcome::from_result("Feedback Enabled", result)]
    })
}

fn guild_metadata(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(metadata) = ctx.data.guild_metadata.as_ref() else {
            return vec![];
        };
        let result = ctx.store.set_guild_metadata(ctx.guild_id, metadata).await;

        vec![ClassOutcome::from_result("Guild Metadata", result)]
    })
}

fn naming_scheme(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(scheme) = ctx.data.naming_scheme else {
            return vec![];
        };
        let result = ctx.store.set_naming_scheme(ctx.guild_id, scheme).await;

        vec![ClassOutcome::from_result("Naming Scheme", result)]
    })
}

fn on_call_users(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("On Call Users");
        for user in &ctx.data.on_call_users {
            tally.record(ctx.store.add_on_call_user(ctx.guild_id, user.get()).await);
        }

        vec![tally.finish()]
    })
}

fn user_permissions(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("User Permissions");
        for permission in &ctx.data.user_permissions {
            tally.record(
                ctx.store
                    .grant_user_permission(
                        ctx.guild_id,
                        permission.snowflake.get(),
                        permission.is_support,
                        permission.is_admin,
                    )
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

fn blacklisted_roles(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("Guild Blacklisted Roles");
        for role in &ctx.data.guild_blacklisted_roles {
            tally.record(ctx.store.add_blacklisted_role(ctx.guild_id, role.get()).await);
        }

        vec![tally.finish()]
    })
}

fn role_permissions(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("Role Permissions");
        for permission in &ctx.data.role_permissions {
            tally.record(
                ctx.store
                    .grant_role_permission(
                        ctx.guild_id,
                        permission.snowflake.get(),
                        permission.is_support,
                        permission.is_admin,
                    )
                    .await,
            );
        }

        vec![tally.finish()]
    })
}

fn tags(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let mut tally = Tally::new("Tags");
        for tag in &ctx.data.tags {
            tally.record(ctx.store.create_tag(ctx.guild_id, tag).await);
        }

        vec![tally.finish()]
    })
}

fn ticket_limit(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(limit) = ctx.data.ticket_limit else {
            return vec![];
        };
        let limit = limit.clamp(0, u8::MAX as i32) as u8;
        let result = ctx.store.set_ticket_limit(ctx.guild_id, limit).await;

        vec![ClassOutcome::from_result("Ticket Limit", result)]
    })
}

fn ticket_permissions(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(permissions) = ctx.data.ticket_permissions.as_ref() else {
            return vec![];
        };
        let result = ctx
            .store
            .set_ticket_permissions(ctx.guild_id, permissions)
            .await;

        vec![ClassOutcome::from_result("Ticket Permissions", result)]
    })
}

fn users_can_close(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let result = ctx
            .store
            .set_users_can_close(ctx.guild_id, ctx.data.users_can_close)
            .await;

        vec![ClassOutcome::from_result("Users Can Close", result)]
    })
}

fn welcome_message(ctx: Arc<UnitContext>) -> UnitFuture {
    Box::pin(async move {
        let Some(message) = ctx.data.welcome_message.as_deref() else {
            return vec![];
        };
        let result = ctx.store.set_welcome_message(ctx.guild_id, message).await;

        vec![ClassOutcome::from_result("Welcome Message", result)]
    })
}
