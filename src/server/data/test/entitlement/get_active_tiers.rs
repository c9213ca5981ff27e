use super::*;

/// Tests that expired entitlements are left out.
///
/// Expected: Ok with the permanent and the unexpired tier only
#[tokio::test]
async fn skips_expired_entitlements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildEntitlement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_entitlement(db, 123, "premium", Some(now - Duration::days(1))).await?;
    factory::create_entitlement(db, 123, "whitelabel", Some(now + Duration::days(30))).await?;
    factory::create_entitlement(db, 123, "premium", None).await?;
    factory::create_entitlement(db, 456, "whitelabel", None).await?;

    let mut tiers = GuildEntitlementRepository::new(db)
        .get_active_tiers(123, now)
        .await?;
    tiers.sort();

    assert_eq!(tiers, vec!["premium".to_string(), "whitelabel".to_string()]);

    Ok(())
}
