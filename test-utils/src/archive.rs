//! Signed export archive fixtures.
//!
//! Builds zip archives laid out the way the dashboard exporter produces them, signed
//! with a deterministic test key so validators under test can be configured with the
//! matching public key.

use std::io::{Cursor, Write};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use zip::{write::SimpleFileOptions, ZipWriter};

use crate::error::TestError;

/// Seed of the deterministic signing key used by default.
pub const TEST_KEY_SEED: [u8; 32] = [7; 32];

/// Signing key matching `test_verifying_key()`.
pub fn test_signing_key() -> SigningKey {
    SigningKey::from_bytes(&TEST_KEY_SEED)
}

/// Public key that verifies archives built with the default key.
pub fn test_verifying_key() -> VerifyingKey {
    test_signing_key().verifying_key()
}

/// Builder for signed data and transcripts archives.
///
/// # Example
///
/// ```rust,ignore
/// let archive = SignedArchiveBuilder::new()
///     .guild_data(&serde_json::json!({ "guild_id": "123" }))
///     .build()?;
/// ```
pub struct SignedArchiveBuilder {
    key: SigningKey,
    entries: Vec<(String, Vec<u8>)>,
}

impl SignedArchiveBuilder {
    pub fn new() -> Self {
        Self::with_key(test_signing_key())
    }

    pub fn with_key(key: SigningKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    /// Encodes the signature of `message` the way the exporter does.
    pub fn sign(&self, message: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(self.key.sign(message).to_bytes())
    }

    /// Adds an entry without a signature.
    pub fn entry(mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.entries.push((name.into(), body.into()));
        self
    }

    /// Adds an entry with a `.sig` entry covering exactly its bytes.
    pub fn signed_entry(self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let body = body.into();
        let signature = self.sign(&body);

        self.entry(format!("{}.sig", name), signature)
            .entry(name, body)
    }

    /// Adds a signed `data.json` document.
    pub fn guild_data(self, document: &serde_json::Value) -> Self {
        self.guild_data_bytes(document.to_string())
    }

    pub fn guild_data_bytes(self, body: impl Into<Vec<u8>>) -> Self {
        self.signed_entry("data.json", body)
    }

    /// Adds a signed `guild_id.txt`.
    pub fn guild_id(self, guild_id: u64) -> Self {
        self.signed_entry("guild_id.txt", guild_id.to_string())
    }

    /// Adds `transcripts/<ticket_id>.json` signed for the given guild.
    pub fn transcript(self, guild_id: u64, ticket_id: i32, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let mut message = format!("{}|{}|", guild_id, ticket_id).into_bytes();
        message.extend_from_slice(&body);
        let signature = self.sign(&message);

        let name = format!("transcripts/{}.json", ticket_id);
        self.entry(format!("{}.sig", name), signature)
            .entry(name, body)
    }

    /// Writes all entries into an in-memory zip archive.
    pub fn build(self) -> Result<Vec<u8>, TestError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for (name, body) in self.entries {
            writer.start_file(name, options)?;
            writer.write_all(&body)?;
        }

        Ok(writer.finish()?.into_inner())
    }
}

impl Default for SignedArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
