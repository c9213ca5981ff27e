use super::*;

fn panels_document(panels: usize) -> serde_json::Value {
    let panels: Vec<serde_json::Value> = (1..=panels)
        .map(|id| serde_json::json!({ "panel_id": id, "title": format!("Panel {}", id) }))
        .collect();

    serde_json::json!({
        "guild_id": GUILD_ID.to_string(),
        "panels": panels,
    })
}

fn disabled_panels(harness: &Harness) -> Vec<bool> {
    harness
        .store
        .state()
        .panels
        .iter()
        .map(|(_, params)| params.disabled && params.force_disabled)
        .collect()
}

/// Panels created past the free limit are force-disabled.
#[tokio::test]
async fn disables_panels_past_free_limit() {
    let harness = Harness::new()
        .with_store(FakeImportStore::with_state(|state| state.existing_panels = 2));

    let report = harness
        .service()
        .import(owner_request(Some(data_archive(&panels_document(2))), None))
        .await
        .unwrap();

    assert!(report.success.contains(&"Panels".to_string()));
    assert_eq!(disabled_panels(&harness), vec![false, true]);
}

#[tokio::test]
async fn keeps_premium_panels_enabled() {
    let harness = Harness::new()
        .with_tier(PremiumTier::Premium)
        .with_store(FakeImportStore::with_state(|state| state.existing_panels = 5));

    harness
        .service()
        .import(owner_request(Some(data_archive(&panels_document(2))), None))
        .await
        .unwrap();

    assert_eq!(disabled_panels(&harness), vec![false, false]);
}

fn premium_settings_document() -> serde_json::Value {
    serde_json::json!({
        "guild_id": GUILD_ID.to_string(),
        "autoclose_settings": { "enabled": true, "since_last_message": 3600 },
        "custom_colors": { "1": 16711680, "2": 65280 },
    })
}

/// Guilds without premium get autoclose disabled and no custom colours.
#[tokio::test]
async fn restricts_premium_settings_without_premium() {
    let harness = Harness::new();

    let report = harness
        .service()
        .import(owner_request(Some(data_archive(&premium_settings_document())), None))
        .await
        .unwrap();

    assert!(report.success.contains(&"Autoclose Settings".to_string()));
    assert_eq!(report.skipped, vec!["Custom Colours (x2)".to_string()]);

    let state = harness.store.state();
    let autoclose = state.autoclose.as_ref().unwrap();
    assert!(!autoclose.enabled);
    assert_eq!(autoclose.since_last_message, Some(3600));
    assert!(state.custom_colours.is_empty());
}

#[tokio::test]
async fn imports_premium_settings_with_premium() {
    let harness = Harness::new().with_tier(PremiumTier::Whitelabel);

    let report = harness
        .service()
        .import(owner_request(Some(data_archive(&premium_settings_document())), None))
        .await
        .unwrap();

    assert!(report.success.contains(&"Custom Colours".to_string()));
    assert!(report.skipped.is_empty());

    let state = harness.store.state();
    assert!(state.autoclose.as_ref().unwrap().enabled);
    assert_eq!(state.custom_colours.get(&1), Some(&16711680));
    assert_eq!(state.custom_colours.get(&2), Some(&65280));
}
