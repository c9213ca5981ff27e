use super::*;

/// Tests importing tickets with explicit ids.
///
/// Expected: Ok with every ticket stored under its given id
#[tokio::test]
async fn inserts_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TicketRepository::new(db)
        .import(123, vec![ticket(11), ticket(12)])
        .await?;

    let stored = entity::prelude::Ticket::find_by_id((123i64, 12))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_id, 555);
    assert_eq!(
        stored.open_time,
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    );

    let rows = entity::prelude::Ticket::find().all(db).await?;
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests that a conflicting id rolls back the whole batch.
///
/// Expected: Err with only the pre-existing ticket left
#[tokio::test]
async fn rolls_back_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::create_ticket(db, 123, 2).await?;

    let result = TicketRepository::new(db)
        .import(123, vec![ticket(1), ticket(2), ticket(3)])
        .await;
    assert!(result.is_err());

    let rows = entity::prelude::Ticket::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 2);

    Ok(())
}
