use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::import_store::{SeaOrmImportStore, SeaOrmMappingStore},
    error::AppError,
    service::{
        guild_owner::DiscordGuildOwnerLookup,
        import::{store::PremiumLookup, ImportDependencies},
        premium::{EntitlementPremiumLookup, StaticPremiumLookup},
        transcript::FsTranscriptStore,
    },
    state::AppState,
    validator::{signature::SignatureVerifier, ArchiveValidator},
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. JSON output is used when
/// `JSON_LOGS` is enabled.
pub fn setup_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before requests are
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared application state.
///
/// # Returns
/// - `Ok(AppState)` - State with the archive validator and import collaborators wired up
/// - `Err(AppError)` - The configured public key could not be parsed
pub fn build_state(config: &Config, db: DatabaseConnection) -> Result<AppState, AppError> {
    let verifier = SignatureVerifier::from_pem(&config.import_public_key)?;
    let validator = ArchiveValidator::new(verifier)
        .with_max_uncompressed_size(config.import_max_uncompressed_size)
        .with_max_individual_file_size(config.import_max_file_size);

    let premium: Arc<dyn PremiumLookup> = match config.premium_tier_override {
        Some(tier) => {
            tracing::warn!("Premium lookup overridden, every guild is treated as {}", tier);
            Arc::new(StaticPremiumLookup(tier))
        }
        None => Arc::new(EntitlementPremiumLookup::new(db.clone())),
    };

    let discord_http = Arc::new(Http::new(&config.discord_bot_token));

    let import = ImportDependencies {
        store: Arc::new(SeaOrmImportStore::new(db.clone())),
        mappings: Arc::new(SeaOrmMappingStore::new(db)),
        premium,
        owners: Arc::new(DiscordGuildOwnerLookup::new(discord_http)),
        transcripts: Arc::new(FsTranscriptStore::new(config.import_storage_dir.clone())),
    };

    Ok(AppState::new(
        Arc::new(validator),
        import,
        config.import_timeout,
    ))
}

/// CORS policy for the dashboard frontend.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
