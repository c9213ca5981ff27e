use super::*;

/// Tests that stored areas are resolved to entity classes.
///
/// Expected: Ok with known areas mapped and unknown areas ignored
#[tokio::test]
async fn ignores_unknown_areas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ImportMapping)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_mapping(db, 123, "form_input", 100, 1).await?;
    factory::create_mapping(db, 123, "legacy_area", 5, 6).await?;

    let store = SeaOrmMappingStore::new(db.clone());
    let mappings = store.get_mapping(123).await?;

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[&EntityClass::FormInput][&100], 1);

    Ok(())
}

/// Tests that a recorded mapping is read back under its class.
///
/// Expected: Ok with the ticket mapping present
#[tokio::test]
async fn reads_back_recorded_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ImportMapping)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SeaOrmMappingStore::new(db.clone());
    store.set_mapping(123, EntityClass::Ticket, 4, 14).await?;

    let mappings = store.get_mapping(123).await?;
    assert_eq!(mappings[&EntityClass::Ticket][&4], 14);

    Ok(())
}
