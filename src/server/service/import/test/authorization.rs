use super::*;
use crate::server::error::validation::ValidationError;
use test_utils::fixture;

#[tokio::test]
async fn rejects_request_without_archives() {
    let harness = Harness::new();

    let result = harness.service().import(owner_request(None, None)).await;

    assert!(matches!(result, Err(ImportError::MissingArchive)));
}

/// Only the guild owner may import.
#[tokio::test]
async fn rejects_user_who_does_not_own_guild() {
    let harness = Harness::new();
    let request = ImportRequest {
        user_id: 7,
        ..owner_request(Some(data_archive(&fixture::guild_data::document(GUILD_ID))), None)
    };

    let result = harness.service().import(request).await;

    assert!(matches!(
        result,
        Err(ImportError::NotGuildOwner {
            guild_id: GUILD_ID,
            user_id: 7
        })
    ));
    assert!(harness.store.state().tags.is_empty());
}

/// Archives exported from another guild are rejected before anything is written.
#[tokio::test]
async fn rejects_archive_of_another_guild() {
    let harness = Harness::new();
    let archive = data_archive(&fixture::guild_data::document(999));

    let result = harness.service().import(owner_request(Some(archive), None)).await;

    assert!(matches!(
        result,
        Err(ImportError::GuildIdMismatch {
            target: GUILD_ID,
            archive: 999
        })
    ));
    assert!(harness.store.state().tags.is_empty());
    assert_eq!(harness.mappings.count(EntityClass::Ticket), 0);
}

#[tokio::test]
async fn rejects_tampered_archive() {
    let harness = Harness::new();
    let builder = SignedArchiveBuilder::new();
    let signature = builder.sign(b"{\"guild_id\":\"123\"}");
    let archive = builder
        .entry("data.json.sig", signature)
        .entry("data.json", "{\"guild_id\":\"124\"}")
        .build()
        .unwrap();

    let result = harness.service().import(owner_request(Some(archive), None)).await;

    assert!(matches!(
        result,
        Err(ImportError::Validation(ValidationError::ValidationFailed))
    ));
}

/// An import running past its deadline is aborted.
#[tokio::test]
async fn aborts_import_past_deadline() {
    let harness = Harness::new()
        .with_owner_delay(Duration::from_secs(5), Duration::from_millis(50));
    let archive = data_archive(&fixture::guild_data::empty_document(GUILD_ID));

    let result = harness.service().import(owner_request(Some(archive), None)).await;

    assert!(matches!(result, Err(ImportError::DeadlineExceeded)));
}

/// A guild exported while globally blacklisted is only blacklisted here.
#[tokio::test]
async fn blacklists_globally_blacklisted_guild_without_importing() {
    let harness = Harness::new();
    let mut document = fixture::guild_data::document(GUILD_ID);
    document["guild_is_globally_blacklisted"] = serde_json::json!(true);

    let result = harness
        .service()
        .import(owner_request(Some(data_archive(&document)), None))
        .await;

    assert!(matches!(
        result,
        Err(ImportError::GuildBlacklisted { guild_id: GUILD_ID })
    ));
    let state = harness.store.state();
    assert_eq!(state.server_blacklist.as_deref(), Some("Blacklisted on v1"));
    assert!(state.tags.is_empty());
    assert!(state.tickets.is_empty());
    assert!(state.language.is_none());
    drop(state);
    assert_eq!(harness.mappings.count(EntityClass::Ticket), 0);
}
