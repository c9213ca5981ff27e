use super::*;

/// Tests that rules replace the previous set and keep their order.
///
/// Expected: Ok with only the second set stored, positioned in order
#[tokio::test]
async fn replaces_rules_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::create_panel(db, 123).await?;
    let repo = PanelRepository::new(db);

    repo.set_access_control_rules(
        panel.id,
        vec![AccessControlRuleParams {
            role_id: 1,
            action: AccessControlAction::Allow,
        }],
    )
    .await?;
    repo.set_access_control_rules(
        panel.id,
        vec![
            AccessControlRuleParams {
                role_id: 20,
                action: AccessControlAction::Deny,
            },
            AccessControlRuleParams {
                role_id: 10,
                action: AccessControlAction::Allow,
            },
        ],
    )
    .await?;

    let rules = entity::prelude::PanelAccessControlRule::find()
        .filter(entity::panel_access_control_rule::Column::PanelId.eq(panel.id))
        .order_by_asc(entity::panel_access_control_rule::Column::Position)
        .all(db)
        .await?;

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].role_id, 20);
    assert_eq!(rules[0].action, "deny");
    assert_eq!(rules[1].role_id, 10);
    assert_eq!(rules[1].action, "allow");

    Ok(())
}
