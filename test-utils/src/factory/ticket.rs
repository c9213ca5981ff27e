//! Ticket factory for creating test ticket entities.

use crate::fixture;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Creates a closed ticket with the given per-guild id.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: i64,
    id: i32,
) -> Result<entity::ticket::Model, DbErr> {
    fixture::ticket::entity_builder()
        .guild_id(guild_id)
        .id(id)
        .build()
        .into_active_model()
        .insert(db)
        .await
}

/// Creates `count` consecutive tickets starting at id 1.
pub async fn create_tickets(
    db: &DatabaseConnection,
    guild_id: i64,
    count: i32,
) -> Result<Vec<entity::ticket::Model>, DbErr> {
    let mut tickets = Vec::new();
    for id in 1..=count {
        tickets.push(create_ticket(db, guild_id, id).await?);
    }

    Ok(tickets)
}
