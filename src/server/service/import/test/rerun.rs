use super::*;
use test_utils::fixture;

/// Re-running an import skips records mapped by the first run.
#[tokio::test]
async fn skips_records_imported_by_previous_run() {
    let harness = Harness::new();
    let archive = data_archive(&fixture::guild_data::document(GUILD_ID));

    harness
        .service()
        .import(owner_request(Some(archive.clone()), None))
        .await
        .unwrap();
    let report = harness
        .service()
        .import(owner_request(Some(archive), None))
        .await
        .unwrap();

    assert!(report.failed.is_empty(), "failed: {:?}", report.failed);
    for label in ["Forms (x1)", "Form Inputs (x2)", "Tickets (x5)"] {
        assert!(report.skipped.contains(&label.to_string()), "missing {}", label);
    }

    let state = harness.store.state();
    assert_eq!(state.forms.len(), 1);
    assert_eq!(state.form_inputs.len(), 2);
    assert_eq!(state.tickets.len(), 5);
    assert_eq!(harness.mappings.count(EntityClass::Ticket), 5);
}

/// A record that failed is retried by the next run without duplicating the rest.
#[tokio::test]
async fn retries_failed_records() {
    let harness = Harness::new().with_store(FakeImportStore::with_state(|state| {
        state.failing_tags.insert("faq".to_string());
    }));
    let archive = data_archive(&fixture::guild_data::document(GUILD_ID));

    let first = harness
        .service()
        .import(owner_request(Some(archive.clone()), None))
        .await
        .unwrap();

    assert_eq!(first.failed, vec!["Tags (x1)".to_string()]);
    assert!(!harness.store.state().tags.contains_key("faq"));

    harness.store.state().failing_tags.clear();
    let second = harness
        .service()
        .import(owner_request(Some(archive), None))
        .await
        .unwrap();

    assert!(second.failed.is_empty(), "failed: {:?}", second.failed);
    assert!(second.success.contains(&"Tags".to_string()));

    let state = harness.store.state();
    assert_eq!(state.tags.len(), 2);
    assert_eq!(state.forms.len(), 1);
    assert_eq!(state.tickets.len(), 5);
}
