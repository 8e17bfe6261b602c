use super::*;

/// Tests that setting a status records a status_changed event.
///
/// Expected: Ok(UserGame) and one event of kind status_changed
#[tokio::test]
async fn records_status_changed_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .title("Celeste")
        .build()
        .await?;
    let user = create_domain_user(db, "Madeline").await?;

    let tracked = GameService::new(db)
        .set_status(&user.discord_id, &game.slug, PlayStatus::Completed, false)
        .await?;

    assert_eq!(tracked.status, PlayStatus::Completed);

    let events = Event::find().all(db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::StatusChanged.as_str());
    assert_eq!(events[0].title, "Marked Celeste as Completed");
    assert_eq!(events[0].user_id.as_deref(), Some(user.discord_id.as_str()));

    Ok(())
}

/// Tests setting a status on an unknown game.
///
/// Expected: Err(AppError::NotFound) and nothing stored
#[tokio::test]
async fn unknown_game_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Nobody").await?;

    let result = GameService::new(db)
        .set_status(&user.discord_id, "missing", PlayStatus::Playing, false)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(UserGame::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the status write is rolled back when the event cannot be stored.
///
/// Built without the event table so the second write fails.
///
/// Expected: Err(AppError::DbErr) and no tracking entry
#[tokio::test]
async fn rolls_back_when_event_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_game_tables()
        .with_table(UserGame)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = create_domain_user(db, "Madeline").await?;

    let result = GameService::new(db)
        .set_status(&user.discord_id, &game.slug, PlayStatus::Playing, true)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(UserGame::find().count(db).await?, 0);

    Ok(())
}
