use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use ed25519_dalek::{pkcs8::DecodePublicKey, Signature, Verifier, VerifyingKey};

use crate::server::error::{config::ConfigError, validation::ValidationError};

/// Suffix of the entry holding the detached signature of another entry.
pub const SIGNATURE_SUFFIX: &str = ".sig";

/// Verifies detached ed25519 signatures produced by the exporter.
///
/// Signatures are stored as unpadded URL-safe base64 of the raw 64 signature bytes.
#[derive(Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Loads a PEM encoded SubjectPublicKeyInfo ed25519 key.
    pub fn from_pem(pem: &str) -> Result<Self, ConfigError> {
        let key = VerifyingKey::from_public_key_pem(pem.trim())
            .map_err(|e| ConfigError::InvalidPublicKey(e.to_string()))?;

        Ok(Self::new(key))
    }

    pub fn verify(&self, message: &[u8], encoded_signature: &[u8]) -> Result<(), ValidationError> {
        let raw = URL_SAFE_NO_PAD
            .decode(encoded_signature.trim_ascii())
            .map_err(|_| ValidationError::ValidationFailed)?;
        let bytes: [u8; 64] = raw
            .try_into()
            .map_err(|_| ValidationError::ValidationFailed)?;

        self.key
            .verify(message, &Signature::from_bytes(&bytes))
            .map_err(|_| ValidationError::ValidationFailed)
    }
}

/// Message a transcript signature covers, binding the body to its guild and ticket.
pub fn transcript_message(guild_id: u64, ticket_id: i32, body: &[u8]) -> Vec<u8> {
    let prefix = format!("{}|{}|", guild_id, ticket_id);
    let mut message = Vec::with_capacity(prefix.len() + body.len());
    message.extend_from_slice(prefix.as_bytes());
    message.extend_from_slice(body);
    message
}
