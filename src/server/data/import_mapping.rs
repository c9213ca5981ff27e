//! Import mapping repository.
//!
//! Stores, per guild and area, which id a record of an imported archive received in this
//! installation. Areas are free-form strings so the table outlives the set of importable
//! record kinds.

use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct ImportMappingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportMappingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every mapping of a guild grouped by area.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Area name to source id to target id; empty if nothing was imported
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_guild(
        &self,
        guild_id: u64,
    ) -> Result<HashMap<String, HashMap<i32, i32>>, DbErr> {
        let rows = entity::prelude::ImportMapping::find()
            .filter(entity::import_mapping::Column::GuildId.eq(guild_id as i64))
            .all(self.db)
            .await?;

        let mut mappings: HashMap<String, HashMap<i32, i32>> = HashMap::new();
        for row in rows {
            mappings
                .entry(row.area)
                .or_default()
                .insert(row.source_id, row.target_id);
        }

        Ok(mappings)
    }

    /// Records a mapping. An existing mapping for the same source id is kept.
    pub async fn set(
        &self,
        guild_id: u64,
        area: &str,
        source_id: i32,
        target_id: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::ImportMapping::insert(entity::import_mapping::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            area: ActiveValue::Set(area.to_string()),
            source_id: ActiveValue::Set(source_id),
            target_id: ActiveValue::Set(target_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::import_mapping::Column::GuildId,
                entity::import_mapping::Column::Area,
                entity::import_mapping::Column::SourceId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
