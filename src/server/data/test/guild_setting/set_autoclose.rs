use super::*;

/// Tests that structured settings are stored as JSON documents.
///
/// Expected: Ok with the document decoding back to the same settings
#[tokio::test]
async fn stores_settings_as_json() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = AutoCloseSettings {
        enabled: true,
        since_open_with_no_response: Some(3600),
        since_last_message: None,
        on_user_leave: Some(true),
    };

    let repo = GuildSettingRepository::new(db);
    repo.set_autoclose(123, &settings).await?;

    let stored = repo.get(123).await?.unwrap();
    let decoded: AutoCloseSettings = serde_json::from_str(&stored.autoclose.unwrap()).unwrap();
    assert_eq!(decoded, settings);

    Ok(())
}
