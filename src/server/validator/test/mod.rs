use crate::server::{error::validation::ValidationError, validator::ArchiveValidator};
use std::io::Cursor;
use test_utils::{
    archive::{test_verifying_key, SignedArchiveBuilder},
    fixture,
};

mod guild_data;
mod guild_transcripts;
mod signature;

fn validator() -> ArchiveValidator {
    ArchiveValidator::from_key(test_verifying_key())
}
