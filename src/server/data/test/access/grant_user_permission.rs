use super::*;

/// Tests granting permissions to a user without existing permissions.
///
/// Expected: Ok with exactly the granted levels
#[tokio::test]
async fn grants_new_permission() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildAccessRepository::new(db);
    repo.grant_user_permission(123, 42, true, false).await?;

    let stored = entity::prelude::UserPermission::find_by_id((123i64, 42i64))
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_support);
    assert!(!stored.is_admin);

    Ok(())
}

/// Tests that a grant never revokes a level the user already holds.
///
/// Expected: Ok with admin kept after granting support only
#[tokio::test]
async fn keeps_existing_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_settings_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildAccessRepository::new(db);
    repo.grant_user_permission(123, 42, false, true).await?;
    repo.grant_user_permission(123, 42, true, false).await?;

    let stored = entity::prelude::UserPermission::find_by_id((123i64, 42i64))
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_support);
    assert!(stored.is_admin);

    Ok(())
}
