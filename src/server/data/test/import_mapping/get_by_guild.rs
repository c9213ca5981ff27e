use super::*;

/// Tests that mappings are grouped by area and scoped to the guild.
///
/// Expected: Ok with two areas for the guild and nothing from other guilds
#[tokio::test]
async fn groups_mappings_by_area() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ImportMapping)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_mapping(db, 123, "ticket", 1, 101).await?;
    factory::create_mapping(db, 123, "ticket", 2, 102).await?;
    factory::create_mapping(db, 123, "form", 10, 7).await?;
    factory::create_mapping(db, 456, "ticket", 1, 9).await?;

    let mappings = ImportMappingRepository::new(db).get_by_guild(123).await?;

    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings["ticket"].len(), 2);
    assert_eq!(mappings["ticket"][&2], 102);
    assert_eq!(mappings["form"][&10], 7);

    Ok(())
}

/// Tests a guild that never imported anything.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ImportMapping)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mappings = ImportMappingRepository::new(db).get_by_guild(123).await?;
    assert!(mappings.is_empty());

    Ok(())
}
