use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    model::premium::PremiumTier,
};

const MIB: u64 = 1024 * 1024;

const DEFAULT_MAX_UNCOMPRESSED_SIZE: u64 = 500 * MIB;
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * MIB;
const DEFAULT_MAX_UPLOAD_SIZE: u64 = 1024 * MIB;
const DEFAULT_TIMEOUT_MINUTES: u64 = 1500;
const DEFAULT_STORAGE_DIR: &str = "./import-storage";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// PEM encoded ed25519 public key that export archives are signed against
    pub import_public_key: String,
    pub import_max_uncompressed_size: u64,
    pub import_max_file_size: u64,
    pub import_max_upload_size: usize,
    pub import_timeout: Duration,
    pub import_storage_dir: PathBuf,

    /// Replaces the entitlement lookup when set, for self-hosted deployments
    pub premium_tier_override: Option<PremiumTier>,

    pub bind_addr: String,
    pub json_logs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            import_public_key: required("IMPORT_PUBLIC_KEY")?,
            import_max_uncompressed_size: parsed(
                "IMPORT_MAX_UNCOMPRESSED_SIZE",
                DEFAULT_MAX_UNCOMPRESSED_SIZE,
            )?,
            import_max_file_size: parsed("IMPORT_MAX_FILE_SIZE", DEFAULT_MAX_FILE_SIZE)?,
            import_max_upload_size: parsed(
                "IMPORT_MAX_UPLOAD_SIZE",
                DEFAULT_MAX_UPLOAD_SIZE as usize,
            )?,
            import_timeout: Duration::from_secs(
                parsed("IMPORT_TIMEOUT_MINUTES", DEFAULT_TIMEOUT_MINUTES)? * 60,
            ),
            import_storage_dir: std::env::var("IMPORT_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR)),
            premium_tier_override: optional_parsed("PREMIUM_TIER_OVERRIDE")?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            json_logs: optional_parsed::<bool>("JSON_LOGS")?.unwrap_or(false),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(optional_parsed(name)?.unwrap_or(default))
}

fn optional_parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
