use super::*;
use crate::server::service::import::report::ImportReport;
use test_utils::fixture;

async fn import_document(harness: &Harness, document: serde_json::Value) -> ImportReport {
    harness
        .service()
        .import(owner_request(Some(data_archive(&document)), None))
        .await
        .unwrap()
}

/// Imports every record of a representative export and maps the remapped ones.
#[tokio::test]
async fn imports_representative_export() {
    let harness = Harness::new();

    let report = import_document(&harness, fixture::guild_data::document(GUILD_ID)).await;

    assert!(report.failed.is_empty(), "failed: {:?}", report.failed);
    assert!(report.skipped.is_empty(), "skipped: {:?}", report.skipped);
    for label in ["Language", "Tags", "Forms", "Form Inputs", "Tickets"] {
        assert!(report.success.contains(&label.to_string()), "missing {}", label);
    }

    assert_eq!(harness.mappings.count(EntityClass::Ticket), 5);
    assert_eq!(harness.mappings.count(EntityClass::Form), 1);
    assert_eq!(harness.mappings.count(EntityClass::FormInput), 2);

    let state = harness.store.state();
    assert_eq!(state.language.as_deref(), Some("en"));
    assert_eq!(state.tags.len(), 2);
    assert_eq!(state.tickets.len(), 5);
}

/// Imported forms get a suffixed title and a fresh custom id.
#[tokio::test]
async fn renames_forms_with_fresh_custom_ids() {
    let harness = Harness::new();

    import_document(&harness, fixture::guild_data::document(GUILD_ID)).await;

    let state = harness.store.state();
    let (form_id, title, custom_id) = &state.forms[0];
    assert_eq!(title, "Application (Imported)");
    assert_ne!(custom_id, "abc");
    assert_eq!(custom_id.len(), 30);
    assert!(state.form_inputs.iter().all(|(_, parent)| parent == form_id));
}

/// Tickets are shifted past the tickets the guild already has.
#[tokio::test]
async fn offsets_ticket_ids_by_existing_tickets() {
    let harness = Harness::new()
        .with_store(FakeImportStore::with_state(|state| state.existing_tickets = 10));

    import_document(&harness, fixture::guild_data::document(GUILD_ID)).await;

    let ids: Vec<i32> = harness.store.state().tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![11, 12, 13, 14, 15]);
}

/// Inputs of a form that could not be created are skipped, not failed.
#[tokio::test]
async fn skips_inputs_of_failed_form() {
    let harness = Harness::new().with_store(FakeImportStore::with_state(|state| {
        state.failing_forms.insert("Application (Imported)".to_string());
    }));

    let report = import_document(&harness, fixture::guild_data::document(GUILD_ID)).await;

    assert_eq!(report.failed, vec!["Forms (x1)".to_string()]);
    assert_eq!(report.skipped, vec!["Form Inputs (x2)".to_string()]);
    assert!(report.success.contains(&"Tickets".to_string()));
    assert_eq!(harness.mappings.count(EntityClass::Form), 0);
    assert_eq!(harness.mappings.count(EntityClass::FormInput), 0);
}

/// Panels referencing a failed form are skipped, and so are their settings.
#[tokio::test]
async fn skips_panels_of_failed_form() {
    let harness = Harness::new().with_store(FakeImportStore::with_state(|state| {
        state.failing_forms.insert("Application (Imported)".to_string());
    }));
    let document = serde_json::json!({
        "guild_id": GUILD_ID.to_string(),
        "forms": [{ "id": 10, "title": "Application" }],
        "panels": [
            { "panel_id": 1, "title": "Apply", "form_id": 10 },
            { "panel_id": 2, "title": "Support" },
        ],
        "panel_mention_user": { "1": true },
    });

    let report = import_document(&harness, document).await;

    assert!(report.success.contains(&"Panels".to_string()));
    assert!(report.skipped.contains(&"Panel Mention User (x1)".to_string()));
    let state = harness.store.state();
    assert_eq!(state.panels.len(), 1);
    assert_eq!(state.panels[0].1.title, "Support (Imported)");
}

/// Imported panels never point at the source panel's live message.
#[tokio::test]
async fn imports_panels_under_fresh_message_ids() {
    let harness = Harness::new();
    let document = serde_json::json!({
        "guild_id": GUILD_ID.to_string(),
        "panels": [{ "panel_id": 1, "title": "Support", "message_id": "1001" }],
    });

    import_document(&harness, document).await;

    let state = harness.store.state();
    assert_eq!(state.panels.len(), 1);
    assert_eq!(state.panels[0].1.message_id, 1000);
}

/// A panel commit failure fails every panel of the batch and maps none of them.
#[tokio::test]
async fn fails_panels_when_commit_fails() {
    let harness = Harness::new()
        .with_store(FakeImportStore::with_state(|state| state.fail_panel_commit = true));
    let document = serde_json::json!({
        "guild_id": GUILD_ID.to_string(),
        "panels": [{ "panel_id": 1 }, { "panel_id": 2 }],
    });

    let report = import_document(&harness, document).await;

    assert!(report.failed.contains(&"Panels (x2)".to_string()));
    assert_eq!(harness.mappings.count(EntityClass::Panel), 0);
    assert!(harness.store.state().panels.is_empty());
}

/// A mapping that cannot be persisted aborts the import.
#[tokio::test]
async fn aborts_when_mapping_cannot_be_persisted() {
    let harness = Harness::new().with_mappings(FakeMappingStore {
        fail_writes: true,
        ..Default::default()
    });

    let result = harness
        .service()
        .import(owner_request(
            Some(data_archive(&fixture::guild_data::document(GUILD_ID))),
            None,
        ))
        .await;

    assert!(matches!(result, Err(ImportError::Database(_))));
}
