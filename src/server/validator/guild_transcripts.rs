use std::{
    collections::HashMap,
    io::{Read, Seek},
    sync::LazyLock,
};

use regex::Regex;

use crate::server::{
    error::validation::ValidationError,
    model::guild_data::GuildTranscripts,
    validator::{
        archive::ArchiveReader,
        signature::{transcript_message, SIGNATURE_SUFFIX},
        ArchiveValidator,
    },
};

/// Entry holding the decimal id of the guild the transcripts were exported from.
pub const GUILD_ID_ENTRY: &str = "guild_id.txt";

static TRANSCRIPT_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^transcripts/(\d+)\.json$").expect("transcript entry pattern is valid")
});

impl ArchiveValidator {
    /// Verifies a transcripts archive and returns every transcript it carries.
    ///
    /// `guild_id.txt` is signed over its raw bytes. Each `transcripts/<ticket id>.json` is
    /// signed over `"<guild id>|<ticket id>|<body>"`, binding it to both the guild and the
    /// ticket. Entries not matching the transcript naming are ignored. A single bad
    /// signature rejects the whole archive.
    pub fn validate_guild_transcripts<R: Read + Seek>(
        &self,
        input: R,
    ) -> Result<GuildTranscripts, ValidationError> {
        let mut archive = ArchiveReader::open(input, self.limits)?;

        let raw_guild_id = archive.read_entry(GUILD_ID_ENTRY)?;
        let guild_id_signature =
            archive.read_entry(&format!("{}{}", GUILD_ID_ENTRY, SIGNATURE_SUFFIX))?;
        self.verifier.verify(&raw_guild_id, &guild_id_signature)?;

        let guild_id_text = String::from_utf8_lossy(&raw_guild_id);
        let guild_id: u64 = guild_id_text
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidGuildId(guild_id_text.trim().to_string()))?;

        let mut transcripts = HashMap::new();
        for name in archive.entry_names() {
            let Some(ticket_id) = transcript_ticket_id(&name) else {
                continue;
            };

            let body = archive.read_entry(&name)?;
            let signature = archive.read_entry(&format!("{}{}", name, SIGNATURE_SUFFIX))?;
            self.verifier
                .verify(&transcript_message(guild_id, ticket_id, &body), &signature)?;

            transcripts.insert(ticket_id, body);
        }

        Ok(GuildTranscripts {
            guild_id,
            transcripts,
        })
    }
}

fn transcript_ticket_id(name: &str) -> Option<i32> {
    TRANSCRIPT_ENTRY
        .captures(name)
        .and_then(|captures| captures.get(1))
        .and_then(|id| id.as_str().parse().ok())
}
