use thiserror::Error;

/// Failures raised while verifying an uploaded export archive.
///
/// Every variant means the archive must be rejected as a whole; nothing read from a
/// failed archive is ever handed to the importer.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required archive entry is absent, including the `.sig` of a present entry.
    #[error("Archive entry not found: {0}")]
    NotFound(String),

    /// A signature is malformed or does not verify against the configured public key.
    #[error("Signature validation failed")]
    ValidationFailed,

    /// An entry or the sum of decompressed entries exceeded a configured limit.
    #[error("Archive exceeds the maximum allowed size")]
    MaximumSizeExceeded,

    /// The guild id recorded in the archive is not a decimal snowflake.
    #[error("Archive contains an invalid guild id: {0}")]
    InvalidGuildId(String),

    /// The upload is not a readable zip container.
    #[error(transparent)]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A signed document is not valid JSON for its expected shape.
    #[error("Failed to decode archive document: {0}")]
    Decode(#[from] serde_json::Error),
}
