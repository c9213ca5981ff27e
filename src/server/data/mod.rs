//! Database repository layer.
//!
//! Repositories hold a reference to a connection and perform the queries, inserts and
//! upserts for one area of the schema. They accept plain parameter models and never leak
//! SeaORM active models to callers. `import_store` adapts them to the storage seams of
//! the import orchestrator.

pub mod access;
pub mod embed;
pub mod entitlement;
pub mod form;
pub mod guild_setting;
pub mod import_mapping;
pub mod import_store;
pub mod multi_panel;
pub mod panel;
pub mod support_team;
pub mod tag;
pub mod ticket;
pub mod ticket_history;

#[cfg(test)]
mod test;
