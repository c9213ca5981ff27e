use super::*;

/// Tests validating a correctly signed transcripts archive.
///
/// Expected: Ok with the guild id and every transcript keyed by ticket id
#[test]
fn returns_signed_transcripts() {
    let archive = SignedArchiveBuilder::new()
        .guild_id(123)
        .transcript(123, 1, r#"{"messages":[]}"#)
        .transcript(123, 42, r#"{"messages":[1]}"#)
        .build()
        .unwrap();

    let transcripts = validator()
        .validate_guild_transcripts(Cursor::new(archive))
        .unwrap();

    assert_eq!(transcripts.guild_id, 123);
    assert_eq!(transcripts.transcripts.len(), 2);
    assert_eq!(transcripts.transcripts[&42], br#"{"messages":[1]}"#.to_vec());
}

/// Tests a transcript signed for another guild.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_transcript_of_other_guild() {
    let archive = SignedArchiveBuilder::new()
        .guild_id(123)
        .transcript(456, 1, "{}")
        .build()
        .unwrap();

    let result = validator().validate_guild_transcripts(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests a transcript whose signature belongs to a different ticket.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_transcript_moved_to_other_ticket() {
    let builder = SignedArchiveBuilder::new();
    let mut message = b"123|1|".to_vec();
    message.extend_from_slice(b"{}");
    let signature = builder.sign(&message);

    let archive = builder
        .guild_id(123)
        .entry("transcripts/2.json.sig", signature)
        .entry("transcripts/2.json", "{}")
        .build()
        .unwrap();

    let result = validator().validate_guild_transcripts(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests that a bad signature on one transcript rejects the whole archive.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_archive_with_one_bad_transcript() {
    let archive = SignedArchiveBuilder::new()
        .guild_id(123)
        .transcript(123, 1, "{}")
        .entry("transcripts/2.json.sig", "AAAA")
        .entry("transcripts/2.json", "{}")
        .build()
        .unwrap();

    let result = validator().validate_guild_transcripts(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests that entries outside the transcript naming are not verified.
///
/// Expected: Ok with only the named transcript returned
#[test]
fn ignores_unrelated_entries() {
    let archive = SignedArchiveBuilder::new()
        .guild_id(123)
        .transcript(123, 7, "{}")
        .entry("README.txt", "exported by the dashboard")
        .entry("transcripts/notes.json", "{}")
        .build()
        .unwrap();

    let transcripts = validator()
        .validate_guild_transcripts(Cursor::new(archive))
        .unwrap();

    assert_eq!(transcripts.transcripts.len(), 1);
    assert!(transcripts.transcripts.contains_key(&7));
}

/// Tests an archive without the guild id entry.
///
/// Expected: Err(ValidationError::NotFound)
#[test]
fn rejects_missing_guild_id() {
    let archive = SignedArchiveBuilder::new()
        .transcript(123, 1, "{}")
        .build()
        .unwrap();

    let result = validator().validate_guild_transcripts(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::NotFound(_))));
}

/// Tests a signed guild id entry that is not a number.
///
/// Expected: Err(ValidationError::InvalidGuildId)
#[test]
fn rejects_non_numeric_guild_id() {
    let archive = SignedArchiveBuilder::new()
        .signed_entry("guild_id.txt", "my-guild")
        .build()
        .unwrap();

    let result = validator().validate_guild_transcripts(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::InvalidGuildId(_))));
}

/// Tests transcripts that each fit the per-entry limit but together exceed the archive limit.
///
/// Expected: Err(ValidationError::MaximumSizeExceeded)
#[test]
fn rejects_transcripts_over_total_limit() {
    let body = format!(r#"{{"messages":"{}"}}"#, "x".repeat(200));
    let archive = (1..=5)
        .fold(SignedArchiveBuilder::new().guild_id(123), |builder, ticket_id| {
            builder.transcript(123, ticket_id, body.clone())
        })
        .build()
        .unwrap();

    let result = validator()
        .with_max_individual_file_size(256)
        .with_max_uncompressed_size(1000)
        .validate_guild_transcripts(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::MaximumSizeExceeded)));
}
