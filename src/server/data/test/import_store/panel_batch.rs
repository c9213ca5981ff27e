use super::*;

fn panel(custom_id: &str) -> CreatePanelParams {
    CreatePanelParams {
        guild_id: 123,
        message_id: 1,
        channel_id: 2,
        title: "Panel (Imported)".to_string(),
        content: String::new(),
        colour: 0,
        target_category: 3,
        emoji_name: None,
        emoji_id: None,
        welcome_message_embed: None,
        with_default_team: true,
        custom_id: custom_id.to_string(),
        image_url: None,
        thumbnail_url: None,
        button_style: 1,
        button_label: "Open".to_string(),
        form_id: None,
        naming_scheme: None,
        force_disabled: false,
        disabled: false,
        exit_survey_form_id: None,
        pending_category: None,
    }
}

/// Tests that panels created in a batch are stored once it commits.
///
/// Expected: Ok with both panels visible after commit
#[tokio::test]
async fn commits_created_panels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SeaOrmImportStore::new(db.clone());
    let mut batch = store.begin_panel_batch().await?;
    let first = batch.create(panel("first")).await?;
    let second = batch.create(panel("second")).await?;
    batch.commit().await?;

    assert_ne!(first, second);
    assert_eq!(store.count_panels(123).await?, 2);

    Ok(())
}

/// Tests that a batch dropped without committing leaves nothing behind.
///
/// Expected: Ok with no panels stored
#[tokio::test]
async fn discards_uncommitted_panels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SeaOrmImportStore::new(db.clone());
    {
        let mut batch = store.begin_panel_batch().await?;
        batch.create(panel("dropped")).await?;
    }

    let panels = entity::prelude::Panel::find().all(db).await?;
    assert!(panels.is_empty());

    Ok(())
}
