use super::*;

/// Tests creating a panel and counting it.
///
/// Expected: Ok with the panel stored and counted for its guild only
#[tokio::test]
async fn creates_panel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_panel(db, 456).await?;

    let repo = PanelRepository::new(db);
    let panel_id = repo.create(panel_params(123, "abc")).await?;

    let stored = entity::prelude::Panel::find_by_id(panel_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.guild_id, 123);
    assert_eq!(stored.title, "Support (Imported)");
    assert_eq!(stored.custom_id, "abc");
    assert_eq!(repo.count_by_guild(123).await?, 1);

    Ok(())
}
