//! Guild import orchestration.
//!
//! An import takes a verified data archive and/or transcripts archive exported from
//! another installation and recreates the guild's configuration and ticket history.
//! Records are created in dependency order; every created record's source id is mapped
//! to its new id in the mapping store, which lets later stages remap foreign keys and
//! makes re-running an import skip what was already imported.
//!
//! Failures of individual records never abort an import. They are folded into an
//! `ImportReport` with one entry per entity class. Only validation, authorization,
//! global blacklist, mapping-store and deadline errors abort.

pub mod embed;
pub mod form;
pub mod guild;
pub mod mapping;
pub mod multi_panel;
pub mod panel;
pub mod report;
pub mod settings;
pub mod stage;
pub mod store;
pub mod support_team;
pub mod ticket;
pub mod ticket_extras;

#[cfg(test)]
mod test;

use std::{io::Cursor, sync::Arc, time::Duration};

use crate::server::{
    error::import::ImportError,
    model::{
        guild_data::{GuildData, GuildTranscripts},
        import::ImportRequest,
    },
    service::import::{
        mapping::RunMappings,
        report::{ClassOutcome, ImportReport},
        stage::{ImportRun, Stage},
        store::{GuildOwnerLookup, ImportStore, MappingStore, PremiumLookup, TranscriptStore},
    },
    validator::ArchiveValidator,
};

/// Appended to names of imported records that users see in the dashboard.
pub const IMPORTED_SUFFIX: &str = " (Imported)";

/// Server blacklist reason recorded for guilds exported while globally blacklisted.
const GLOBAL_BLACKLIST_REASON: &str = "Blacklisted on v1";

/// Collaborators an import writes through.
#[derive(Clone)]
pub struct ImportDependencies {
    pub store: Arc<dyn ImportStore>,
    pub mappings: Arc<dyn MappingStore>,
    pub premium: Arc<dyn PremiumLookup>,
    pub owners: Arc<dyn GuildOwnerLookup>,
    pub transcripts: Arc<dyn TranscriptStore>,
}

/// Ordered import plan.
///
/// Each stage only reads mappings created by earlier stages. Fan-out stages contain
/// units that do not depend on each other.
pub fn stages() -> Vec<Stage> {
    vec![
        Stage::FanOut {
            name: "guild settings",
            units: guild::units(),
        },
        Stage::Step {
            name: "support teams",
            run: support_team::import_support_teams,
        },
        Stage::Step {
            name: "forms",
            run: form::import_forms,
        },
        Stage::Step {
            name: "form inputs",
            run: form::import_form_inputs,
        },
        Stage::Step {
            name: "embeds",
            run: embed::import_embeds,
        },
        Stage::Step {
            name: "panels",
            run: panel::import_panels,
        },
        Stage::FanOut {
            name: "panel settings",
            units: panel::settings_units(),
        },
        Stage::Step {
            name: "multi panels",
            run: multi_panel::import_multi_panels,
        },
        Stage::Step {
            name: "settings",
            run: settings::import_settings,
        },
        Stage::Step {
            name: "tickets",
            run: ticket::import_tickets,
        },
        Stage::FanOut {
            name: "ticket data",
            units: ticket_extras::units(),
        },
    ]
}

pub struct ImportService {
    validator: Arc<ArchiveValidator>,
    deps: ImportDependencies,
    timeout: Duration,
}

impl ImportService {
    pub fn new(
        validator: Arc<ArchiveValidator>,
        deps: ImportDependencies,
        timeout: Duration,
    ) -> Self {
        Self {
            validator,
            deps,
            timeout,
        }
    }

    /// Validates the uploaded archives and imports them into the request's guild.
    ///
    /// Both archives are verified before anything is written. The acting user must own
    /// the target guild, and every archive must have been exported from that guild.
    ///
    /// # Returns
    /// - `Ok(ImportReport)` - Per-class outcome of the import
    /// - `Err(ImportError::MissingArchive)` - No archive was uploaded
    /// - `Err(ImportError::Validation)` - An archive failed verification
    /// - `Err(ImportError::NotGuildOwner)` - The acting user does not own the guild
    /// - `Err(ImportError::GuildIdMismatch)` - An archive belongs to another guild
    /// - `Err(ImportError::GuildBlacklisted)` - The exported guild was globally blacklisted
    /// - `Err(ImportError::DeadlineExceeded)` - The import ran past the configured timeout
    /// - `Err(ImportError::Database)` - Mappings could not be read or persisted
    pub async fn import(&self, request: ImportRequest) -> Result<ImportReport, ImportError> {
        let guild_id = request.guild_id;

        match tokio::time::timeout(self.timeout, self.run(request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("Import into guild {} exceeded its deadline", guild_id);
                Err(ImportError::DeadlineExceeded)
            }
        }
    }

    async fn run(&self, request: ImportRequest) -> Result<ImportReport, ImportError> {
        if request.data_archive.is_none() && request.transcripts_archive.is_none() {
            return Err(ImportError::MissingArchive);
        }

        let data = match request.data_archive {
            Some(archive) => Some(self.validate_data(archive).await?),
            None => None,
        };
        let transcripts = match request.transcripts_archive {
            Some(archive) => Some(self.validate_transcripts(archive).await?),
            None => None,
        };

        let owner_id = self.deps.owners.get_owner_id(request.guild_id).await?;
        if owner_id != request.user_id {
            return Err(ImportError::NotGuildOwner {
                guild_id: request.guild_id,
                user_id: request.user_id,
            });
        }

        let archive_guild_ids = data
            .iter()
            .map(|data| data.guild_id.get())
            .chain(transcripts.iter().map(|(output, _)| output.guild_id));
        for archive_guild_id in archive_guild_ids {
            if archive_guild_id != request.guild_id {
                return Err(ImportError::GuildIdMismatch {
                    target: request.guild_id,
                    archive: archive_guild_id,
                });
            }
        }

        if data.as_ref().is_some_and(|data| data.guild_is_globally_blacklisted) {
            self.blacklist_guild(request.guild_id).await;
            return Err(ImportError::GuildBlacklisted {
                guild_id: request.guild_id,
            });
        }

        tracing::info!(
            "User {} importing into guild {} (data: {}, transcripts: {})",
            request.user_id,
            request.guild_id,
            data.is_some(),
            transcripts.is_some()
        );

        let mut report = ImportReport::default();

        if let Some((output, archive)) = transcripts {
            let result = self
                .deps
                .transcripts
                .put_transcripts(request.guild_id, archive)
                .await;
            if result.is_ok() {
                tracing::info!(
                    "Stored {} transcripts for guild {}",
                    output.transcripts.len(),
                    request.guild_id
                );
            }
            report.push(ClassOutcome::from_result("Transcripts", result));
        }

        if let Some(data) = data {
            report = self.import_guild_data(request.guild_id, data, report).await?;
        }

        tracing::info!(
            "Import into guild {} finished: {} succeeded, {} failed, {} skipped",
            request.guild_id,
            report.success.len(),
            report.failed.len(),
            report.skipped.len()
        );

        Ok(report)
    }

    /// Carries a global blacklist over to this installation's server blacklist.
    async fn blacklist_guild(&self, guild_id: u64) {
        match self
            .deps
            .store
            .set_server_blacklisted(guild_id, GLOBAL_BLACKLIST_REASON)
            .await
        {
            Ok(()) => tracing::info!("Imported global blacklist of guild {}", guild_id),
            Err(e) => tracing::error!("Failed to blacklist guild {}: {}", guild_id, e),
        }
    }

    /// Runs every import stage for a verified guild document.
    async fn import_guild_data(
        &self,
        guild_id: u64,
        data: GuildData,
        report: ImportReport,
    ) -> Result<ImportReport, ImportError> {
        let premium_tier = self.deps.premium.get_tier(guild_id).await?;
        let stored = self.deps.mappings.get_mapping(guild_id).await?;

        let mut run = ImportRun {
            guild_id,
            data: Arc::new(data),
            store: self.deps.store.clone(),
            mapping_store: self.deps.mappings.clone(),
            premium_tier,
            mappings: RunMappings::from_stored(stored),
            report,
        };

        stage::execute(&stages(), &mut run).await?;

        Ok(run.report)
    }

    async fn validate_data(&self, archive: Vec<u8>) -> Result<GuildData, ImportError> {
        let validator = self.validator.clone();
        let data = tokio::task::spawn_blocking(move || {
            validator.validate_guild_data(Cursor::new(archive))
        })
        .await??;

        Ok(data)
    }

    /// Verifies a transcripts archive, handing the raw archive back for storage.
    async fn validate_transcripts(
        &self,
        archive: Vec<u8>,
    ) -> Result<(GuildTranscripts, Vec<u8>), ImportError> {
        let validator = self.validator.clone();
        let (result, archive) = tokio::task::spawn_blocking(move || {
            let result = validator.validate_guild_transcripts(Cursor::new(archive.as_slice()));
            (result, archive)
        })
        .await?;

        Ok((result?, archive))
    }
}
