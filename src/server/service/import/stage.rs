//! Declarative stage plan and its executor.
//!
//! An import is a fixed sequence of stages. A `FanOut` stage spawns its units as
//! independent tasks that only read a snapshot of the run; the stage ends when all of
//! them have finished. Units are owned by the stage, so dropping an unfinished run
//! aborts them. A `Step` runs on the orchestrating task with mutable access to
//! the run, which is how id mappings are created. Only the orchestrating task ever
//! writes the report.

use std::{collections::HashMap, sync::Arc};

use futures::future::BoxFuture;
use tokio::task::JoinSet;

use crate::server::{
    error::import::ImportError,
    model::{guild_data::GuildData, import::EntityClass, premium::PremiumTier},
    service::import::{
        mapping::RunMappings,
        report::{ClassOutcome, ImportReport},
        store::{ImportStore, MappingStore},
    },
};

pub type UnitFuture = BoxFuture<'static, Vec<ClassOutcome>>;
pub type StepFuture<'a> = BoxFuture<'a, Result<Vec<ClassOutcome>, ImportError>>;

/// Independent piece of work of a fan-out stage.
pub struct Unit {
    /// Reported as failed when the unit panics
    pub label: &'static str,
    pub run: fn(Arc<UnitContext>) -> UnitFuture,
}

pub enum Stage {
    FanOut {
        name: &'static str,
        units: Vec<Unit>,
    },
    Step {
        name: &'static str,
        run: for<'a> fn(&'a mut ImportRun) -> StepFuture<'a>,
    },
}

/// Read-only view of a run handed to fan-out units.
pub struct UnitContext {
    pub guild_id: u64,
    pub data: Arc<GuildData>,
    pub store: Arc<dyn ImportStore>,
    pub premium_tier: PremiumTier,
    pub mappings: RunMappings,
}

/// Mutable state of one import run, owned by the orchestrating task.
pub struct ImportRun {
    pub guild_id: u64,
    pub data: Arc<GuildData>,
    pub store: Arc<dyn ImportStore>,
    pub mapping_store: Arc<dyn MappingStore>,
    pub premium_tier: PremiumTier,
    pub mappings: RunMappings,
    pub report: ImportReport,
}

impl ImportRun {
    /// Persists a newly created record's mapping, then makes it visible to later stages.
    ///
    /// A mapping that cannot be persisted aborts the run: continuing would duplicate the
    /// record on the next import.
    pub async fn record_mapping(
        &mut self,
        class: EntityClass,
        source_id: i32,
        target_id: i32,
    ) -> Result<(), ImportError> {
        self.mapping_store
            .set_mapping(self.guild_id, class, source_id, target_id)
            .await?;
        self.mappings.get_mut(class).insert(source_id, target_id);

        Ok(())
    }

    fn unit_context(&self) -> UnitContext {
        UnitContext {
            guild_id: self.guild_id,
            data: self.data.clone(),
            store: self.store.clone(),
            premium_tier: self.premium_tier,
            mappings: self.mappings.clone(),
        }
    }
}

/// Runs every stage in order, stopping at the first fatal error.
pub async fn execute(stages: &[Stage], run: &mut ImportRun) -> Result<(), ImportError> {
    for stage in stages {
        match stage {
            Stage::FanOut { name, units } => {
                tracing::debug!("Import of guild {}: starting stage {}", run.guild_id, name);

                let context = Arc::new(run.unit_context());
                let mut tasks = JoinSet::new();
                let mut positions = HashMap::with_capacity(units.len());
                for (position, unit) in units.iter().enumerate() {
                    let handle = tasks.spawn((unit.run)(context.clone()));
                    positions.insert(handle.id(), position);
                }

                // Outcomes are reported in plan order regardless of completion order.
                let mut results: Vec<Option<Vec<ClassOutcome>>> = vec![None; units.len()];
                while let Some(joined) = tasks.join_next_with_id().await {
                    let (id, outcome) = match joined {
                        Ok((id, outcomes)) => (id, outcomes),
                        Err(e) => {
                            let id = e.id();
                            let label = positions.get(&id).map_or("unknown", |p| units[*p].label);
                            tracing::error!(
                                "Import unit {} of stage {} aborted: {}",
                                label,
                                name,
                                e
                            );
                            (id, vec![ClassOutcome::failed(label, 1)])
                        }
                    };
                    if let Some(position) = positions.get(&id) {
                        results[*position] = Some(outcome);
                    }
                }

                for outcomes in results.into_iter().flatten() {
                    run.report.extend(outcomes);
                }
            }
            Stage::Step { name, run: step } => {
                tracing::debug!("Import of guild {}: starting stage {}", run.guild_id, name);

                let outcomes = step(run).await?;
                run.report.extend(outcomes);
            }
        }
    }

    Ok(())
}
