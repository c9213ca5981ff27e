use super::*;

/// Tests validating a correctly signed data archive.
///
/// Expected: Ok with the decoded document
#[test]
fn decodes_signed_document() {
    let archive = SignedArchiveBuilder::new()
        .guild_data(&fixture::guild_data::document(123))
        .build()
        .unwrap();

    let data = validator()
        .validate_guild_data(Cursor::new(archive))
        .unwrap();

    assert_eq!(data.guild_id.get(), 123);
    assert_eq!(data.tags.len(), 2);
    assert_eq!(data.form_inputs.len(), 2);
    assert_eq!(data.tickets.len(), 5);
}

/// Tests a document modified after it was signed.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_tampered_document() {
    let builder = SignedArchiveBuilder::new();
    let signature = builder.sign(br#"{"guild_id":"123"}"#);
    let archive = builder
        .entry("data.json.sig", signature)
        .entry("data.json", r#"{"guild_id":"456"}"#)
        .build()
        .unwrap();

    let result = validator().validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests an archive signed by a key other than the trusted one.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_foreign_key() {
    let foreign = ed25519_dalek::SigningKey::from_bytes(&[9; 32]);
    let archive = SignedArchiveBuilder::with_key(foreign)
        .guild_data(&fixture::guild_data::empty_document(123))
        .build()
        .unwrap();

    let result = validator().validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests an archive whose document has no signature entry.
///
/// Expected: Err(ValidationError::NotFound) naming the signature entry
#[test]
fn rejects_missing_signature() {
    let archive = SignedArchiveBuilder::new()
        .entry("data.json", r#"{"guild_id":"123"}"#)
        .build()
        .unwrap();

    let result = validator().validate_guild_data(Cursor::new(archive));

    match result {
        Err(ValidationError::NotFound(name)) => assert_eq!(name, "data.json.sig"),
        other => panic!("unexpected result: {:?}", other.map(|data| data.guild_id)),
    }
}

/// Tests an archive without a data document.
///
/// Expected: Err(ValidationError::NotFound)
#[test]
fn rejects_missing_document() {
    let archive = SignedArchiveBuilder::new()
        .signed_entry("other.json", "{}")
        .build()
        .unwrap();

    let result = validator().validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::NotFound(_))));
}

/// Tests a signature that is not valid base64.
///
/// Expected: Err(ValidationError::ValidationFailed)
#[test]
fn rejects_malformed_signature() {
    let archive = SignedArchiveBuilder::new()
        .entry("data.json.sig", "not a signature!")
        .entry("data.json", r#"{"guild_id":"123"}"#)
        .build()
        .unwrap();

    let result = validator().validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::ValidationFailed)));
}

/// Tests a document larger than the per-entry limit.
///
/// Expected: Err(ValidationError::MaximumSizeExceeded)
#[test]
fn rejects_oversized_entry() {
    let archive = SignedArchiveBuilder::new()
        .guild_data(&fixture::guild_data::document(123))
        .build()
        .unwrap();

    let result = validator()
        .with_max_individual_file_size(64)
        .validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::MaximumSizeExceeded)));
}

/// Tests entries that each fit the per-entry limit but together exceed the archive limit.
///
/// Expected: Err(ValidationError::MaximumSizeExceeded)
#[test]
fn rejects_archive_over_total_limit() {
    let document = fixture::guild_data::document(123).to_string();
    let archive = SignedArchiveBuilder::new()
        .guild_data_bytes(document.clone())
        .build()
        .unwrap();

    let result = validator()
        .with_max_individual_file_size(document.len() as u64)
        .with_max_uncompressed_size(document.len() as u64 + 10)
        .validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::MaximumSizeExceeded)));
}

/// Tests a signed document that is not a guild data document.
///
/// Expected: Err(ValidationError::Decode)
#[test]
fn rejects_invalid_document() {
    let archive = SignedArchiveBuilder::new()
        .guild_data_bytes("not json")
        .build()
        .unwrap();

    let result = validator().validate_guild_data(Cursor::new(archive));

    assert!(matches!(result, Err(ValidationError::Decode(_))));
}

/// Tests input that is not a zip archive.
///
/// Expected: Err(ValidationError::Archive)
#[test]
fn rejects_non_zip_input() {
    let result = validator().validate_guild_data(Cursor::new(b"plain text".to_vec()));

    assert!(matches!(result, Err(ValidationError::Archive(_))));
}
