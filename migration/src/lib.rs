pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_guild_setting_tables;
mod m20250601_000002_create_support_team_tables;
mod m20250601_000003_create_form_tables;
mod m20250601_000004_create_embed_tables;
mod m20250602_000005_create_panel_tables;
mod m20250602_000006_create_ticket_tables;
mod m20250603_000007_create_import_mapping_table;
mod m20250603_000008_create_guild_entitlement_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_guild_setting_tables::Migration),
            Box::new(m20250601_000002_create_support_team_tables::Migration),
            Box::new(m20250601_000003_create_form_tables::Migration),
            Box::new(m20250601_000004_create_embed_tables::Migration),
            Box::new(m20250602_000005_create_panel_tables::Migration),
            Box::new(m20250602_000006_create_ticket_tables::Migration),
            Box::new(m20250603_000007_create_import_mapping_table::Migration),
            Box::new(m20250603_000008_create_guild_entitlement_table::Migration),
        ]
    }
}
