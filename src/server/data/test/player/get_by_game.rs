use super::*;

/// Tests loading the players of one game.
///
/// Verifies only that game's players are returned, most recently active first,
/// with statuses parsed.
///
/// Expected: Ok(Vec<Player>)
#[tokio::test]
async fn returns_players_for_game() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other_game = factory::create_game(db).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let now = Utc::now();
    factory::player::PlayerFactory::new(db, &alice.discord_id, game.id)
        .status("looking")
        .updated_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, &bob.discord_id, game.id)
        .status("offline")
        .updated_at(now)
        .build()
        .await?;
    factory::create_player(db, &alice.discord_id, other_game.id).await?;

    let players = PlayerRepository::new(db).get_by_game(game.id).await?;

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].user_id, bob.discord_id);
    assert_eq!(players[0].status, PlayerStatus::Offline);
    assert_eq!(players[1].status, PlayerStatus::Looking);

    Ok(())
}

/// Tests that an unknown stored status is rejected instead of coerced.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::create_user(db).await?;
    factory::player::PlayerFactory::new(db, &user.discord_id, game.id)
        .status("away")
        .build()
        .await?;

    let result = PlayerRepository::new(db).get_by_game(game.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
