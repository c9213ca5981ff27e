use std::io::{Read, Seek};

use crate::server::{
    error::validation::ValidationError,
    model::guild_data::GuildData,
    validator::{archive::ArchiveReader, signature::SIGNATURE_SUFFIX, ArchiveValidator},
};

/// Entry holding the signed guild data document.
pub const DATA_ENTRY: &str = "data.json";

impl ArchiveValidator {
    /// Verifies a data archive and decodes its guild data document.
    ///
    /// The archive must contain `data.json` and `data.json.sig`; the signature covers the
    /// exact bytes of `data.json`. Decoding only happens after the signature verified.
    ///
    /// # Returns
    /// - `Ok(GuildData)` - Signed, decoded guild document
    /// - `Err(ValidationError::NotFound)` - Either entry is missing
    /// - `Err(ValidationError::ValidationFailed)` - Signature is malformed or does not verify
    /// - `Err(ValidationError::MaximumSizeExceeded)` - A size limit was exceeded while reading
    /// - `Err(ValidationError::Decode)` - Signed document is not a valid guild data document
    pub fn validate_guild_data<R: Read + Seek>(
        &self,
        input: R,
    ) -> Result<GuildData, ValidationError> {
        let mut archive = ArchiveReader::open(input, self.limits)?;

        let body = archive.read_entry(DATA_ENTRY)?;
        let signature = archive.read_entry(&format!("{}{}", DATA_ENTRY, SIGNATURE_SUFFIX))?;

        self.verifier.verify(&body, &signature)?;

        Ok(serde_json::from_slice(&body)?)
    }
}
