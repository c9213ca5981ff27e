use super::*;

/// Tests storing the language of a guild without settings.
///
/// Expected: Ok with a settings row holding only the language
#[tokio::test]
async fn creates_settings_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);
    repo.set_language(123, "de").await?;

    let stored = repo.get(123).await?.unwrap();
    assert_eq!(stored.language.as_deref(), Some("de"));
    assert!(stored.naming_scheme.is_none());

    Ok(())
}

/// Tests that setting one column leaves the other columns of the row untouched.
///
/// Expected: Ok with both the naming scheme and the new language stored
#[tokio::test]
async fn keeps_other_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);
    repo.set_naming_scheme(123, NamingScheme::Username).await?;
    repo.set_language(123, "en").await?;
    repo.set_language(123, "fr").await?;

    let stored = repo.get(123).await?.unwrap();
    assert_eq!(stored.language.as_deref(), Some("fr"));
    assert_eq!(stored.naming_scheme.as_deref(), Some("username"));

    let rows = entity::prelude::GuildSetting::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
