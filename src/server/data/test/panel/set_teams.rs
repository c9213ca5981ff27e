use super::*;

/// Tests that assigning teams replaces the panel's previous teams.
///
/// Expected: Ok with only the new teams assigned
#[tokio::test]
async fn replaces_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::create_panel(db, 123).await?;
    let repo = PanelRepository::new(db);

    repo.set_teams(panel.id, vec![1, 2]).await?;
    repo.set_teams(panel.id, vec![2, 3]).await?;

    let mut teams: Vec<i32> = entity::prelude::PanelTeam::find()
        .filter(entity::panel_team::Column::PanelId.eq(panel.id))
        .all(db)
        .await?
        .into_iter()
        .map(|team| team.team_id)
        .collect();
    teams.sort();

    assert_eq!(teams, vec![2, 3]);

    Ok(())
}

/// Tests clearing a panel's teams.
///
/// Expected: Ok with no teams left
#[tokio::test]
async fn clears_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_panel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let panel = factory::create_panel(db, 123).await?;
    let repo = PanelRepository::new(db);

    repo.set_teams(panel.id, vec![1]).await?;
    repo.set_teams(panel.id, vec![]).await?;

    let teams = entity::prelude::PanelTeam::find().all(db).await?;
    assert!(teams.is_empty());

    Ok(())
}
