use super::*;

/// Tests that only tickets of the requested guild are counted.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_tickets_of_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::ticket::create_tickets(db, 123, 3).await?;
    factory::ticket::create_tickets(db, 456, 2).await?;

    let count = TicketRepository::new(db).count_by_guild(123).await?;
    assert_eq!(count, 3);

    Ok(())
}
