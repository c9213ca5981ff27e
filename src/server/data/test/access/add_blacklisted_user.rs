use super::*;

/// Tests that blacklisting a user twice keeps a single entry.
///
/// Expected: Ok with one blacklist row
#[tokio::test]
async fn ignores_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildAccessRepository::new(db);
    repo.add_blacklisted_user(123, 42).await?;
    repo.add_blacklisted_user(123, 42).await?;

    let rows = entity::prelude::GuildBlacklistedUser::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_id, 42);

    Ok(())
}
