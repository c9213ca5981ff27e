use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{validation::ValidationError, InternalServerError},
};

/// Request-level failures of a guild import.
///
/// Per-entity failures never surface here; they are folded into the import report.
/// These variants abort the request before or during the staged run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Neither a data archive nor a transcripts archive was uploaded.
    #[error("No archive was provided")]
    MissingArchive,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The acting user does not own the target guild.
    #[error("User {user_id} is not the owner of guild {guild_id}")]
    NotGuildOwner { guild_id: u64, user_id: u64 },

    /// The archive was exported from a different guild than the request targets.
    #[error("Archive belongs to guild {archive} but the import targets guild {target}")]
    GuildIdMismatch { target: u64, archive: u64 },

    /// The exported guild was globally blacklisted; nothing besides the blacklist is imported.
    #[error("Guild {guild_id} is blacklisted on v1")]
    GuildBlacklisted { guild_id: u64 },

    /// The import did not finish within the configured deadline.
    #[error("Import deadline exceeded")]
    DeadlineExceeded,

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity, boxed due to its size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),

    /// A blocking validation task panicked or was cancelled.
    #[error(transparent)]
    Task(#[from] tokio::task::JoinError),
}

impl From<serenity::Error> for ImportError {
    fn from(err: serenity::Error) -> Self {
        ImportError::Discord(Box::new(err))
    }
}

/// Maps import failures onto HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing archive, guild id mismatch, or archive rejected by validation
/// - 413 Payload Too Large - Archive exceeds a size limit
/// - 403 Forbidden - Acting user is not the guild owner, or the guild is blacklisted
/// - 504 Gateway Timeout - Import deadline exceeded
/// - 500 Internal Server Error - Database, Discord or task failures
impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        let bad_request = |msg: &str| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: msg.to_string(),
                }),
            )
                .into_response()
        };

        match self {
            Self::MissingArchive => bad_request("No data or transcripts file was provided"),
            Self::GuildIdMismatch { .. } => bad_request("Invalid guild Id"),
            Self::Validation(ValidationError::MaximumSizeExceeded) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorDto {
                    error: "Archive exceeds the maximum allowed size".to_string(),
                }),
            )
                .into_response(),
            Self::Validation(ValidationError::ValidationFailed) => {
                bad_request("Archive signature is invalid")
            }
            Self::Validation(err @ ValidationError::Io(_)) => {
                InternalServerError(err).into_response()
            }
            Self::Validation(err) => {
                tracing::debug!("Rejected import archive: {}", err);
                bad_request(&err.to_string())
            }
            Self::NotGuildOwner { guild_id, user_id } => {
                tracing::debug!("User {} denied import into guild {}", user_id, guild_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Only the server owner can import data".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::GuildBlacklisted { guild_id } => {
                tracing::info!("Rejected import of blacklisted guild {}", guild_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "This server is blacklisted on v1".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::DeadlineExceeded => (
                StatusCode::GATEWAY_TIMEOUT,
                Json(ErrorDto {
                    error: "Import took too long to complete".to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
