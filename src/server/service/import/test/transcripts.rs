use super::*;
use test_utils::fixture;

fn transcripts_archive(guild_id: u64) -> Vec<u8> {
    SignedArchiveBuilder::new()
        .guild_id(guild_id)
        .transcript(guild_id, 1, "{\"messages\":[]}")
        .transcript(guild_id, 2, "{\"messages\":[]}")
        .build()
        .unwrap()
}

#[tokio::test]
async fn stores_verified_transcripts() {
    let harness = Harness::new();
    let archive = transcripts_archive(GUILD_ID);
    let archive_len = archive.len();

    let report = harness
        .service()
        .import(owner_request(None, Some(archive)))
        .await
        .unwrap();

    assert_eq!(report.success, vec!["Transcripts".to_string()]);
    assert!(report.failed.is_empty());
    assert_eq!(
        *harness.transcripts.stored.lock().unwrap(),
        vec![(GUILD_ID, archive_len)]
    );
}

/// Both archives are imported by one request.
#[tokio::test]
async fn imports_data_and_transcripts_together() {
    let harness = Harness::new();

    let report = harness
        .service()
        .import(owner_request(
            Some(data_archive(&fixture::guild_data::document(GUILD_ID))),
            Some(transcripts_archive(GUILD_ID)),
        ))
        .await
        .unwrap();

    assert_eq!(report.success.first().map(String::as_str), Some("Transcripts"));
    assert!(report.success.contains(&"Tickets".to_string()));
}

#[tokio::test]
async fn rejects_transcripts_of_another_guild() {
    let harness = Harness::new();

    let result = harness
        .service()
        .import(owner_request(None, Some(transcripts_archive(999))))
        .await;

    assert!(matches!(result, Err(ImportError::GuildIdMismatch { .. })));
    assert!(harness.transcripts.stored.lock().unwrap().is_empty());
}
