//! Signed export archive verification.
//!
//! Export archives are zip files produced by the dashboard's exporter. Every document
//! inside is accompanied by a detached ed25519 signature so that only archives issued
//! by a trusted exporter can be imported. Verification is synchronous and CPU bound;
//! callers on the async runtime should run it on a blocking thread.

pub mod archive;
pub mod guild_data;
pub mod guild_transcripts;
pub mod signature;

#[cfg(test)]
mod test;

use ed25519_dalek::VerifyingKey;

use crate::server::validator::{archive::SizeLimits, signature::SignatureVerifier};

/// Default cap on the sum of decompressed entries of one archive (250 MiB).
pub const DEFAULT_MAX_UNCOMPRESSED_SIZE: u64 = 250 * 1024 * 1024;
/// Default cap on a single decompressed entry (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Verifies data and transcripts archives against one trusted public key.
#[derive(Clone)]
pub struct ArchiveValidator {
    verifier: SignatureVerifier,
    limits: SizeLimits,
}

impl ArchiveValidator {
    pub fn new(verifier: SignatureVerifier) -> Self {
        Self {
            verifier,
            limits: SizeLimits {
                max_uncompressed_size: DEFAULT_MAX_UNCOMPRESSED_SIZE,
                max_file_size: DEFAULT_MAX_FILE_SIZE,
            },
        }
    }

    pub fn from_key(key: VerifyingKey) -> Self {
        Self::new(SignatureVerifier::new(key))
    }

    pub fn with_max_uncompressed_size(mut self, bytes: u64) -> Self {
        self.limits.max_uncompressed_size = bytes;
        self
    }

    pub fn with_max_individual_file_size(mut self, bytes: u64) -> Self {
        self.limits.max_file_size = bytes;
        self
    }
}
