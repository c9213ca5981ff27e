use super::*;

/// Tests that recording a source id again keeps the first target.
///
/// Expected: Ok with the original mapping unchanged
#[tokio::test]
async fn keeps_first_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ImportMapping)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImportMappingRepository::new(db);
    repo.set(123, "panel", 5, 50).await?;
    repo.set(123, "panel", 5, 60).await?;

    let mappings = repo.get_by_guild(123).await?;
    assert_eq!(mappings["panel"].len(), 1);
    assert_eq!(mappings["panel"][&5], 50);

    Ok(())
}
