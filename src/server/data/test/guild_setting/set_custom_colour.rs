use super::*;

/// Tests that writing a colour slot again replaces its value.
///
/// Expected: Ok with one row per slot holding the latest value
#[tokio::test]
async fn replaces_existing_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingRepository::new(db);
    repo.set_custom_colour(123, 1, 0xff0000).await?;
    repo.set_custom_colour(123, 2, 0x00ff00).await?;
    repo.set_custom_colour(123, 1, 0x0000ff).await?;

    let colour = entity::prelude::CustomColour::find_by_id((123i64, 1i16))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(colour.value, 0x0000ff);

    let rows = entity::prelude::CustomColour::find().all(db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}
