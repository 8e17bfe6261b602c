use super::*;

/// Tests creating an event and finding it by game and title.
///
/// Expected: Ok(Event) and exists_for_game returning true
#[tokio::test]
async fn creates_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = EventRepository::new(db);

    let event = repo
        .create(CreateEventParam {
            user_id: None,
            game_id: Some(game.id),
            kind: EventKind::GameUpdate,
            title: "Version 1.2 released".to_string(),
            description: None,
        })
        .await?;

    assert_eq!(event.kind, EventKind::GameUpdate);
    assert!(repo.exists_for_game(game.id, "Version 1.2 released").await?);
    assert!(!repo.exists_for_game(game.id, "Version 9").await?);

    Ok(())
}
