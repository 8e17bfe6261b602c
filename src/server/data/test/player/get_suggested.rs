use super::*;

/// Tests one entry per user, most recently updated first.
///
/// Expected: Ok(Vec<Player>) with each user once, newest activity first
#[tokio::test]
async fn returns_one_entry_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game_a = factory::create_game(db).await?;
    let game_b = factory::create_game(db).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let now = Utc::now();
    factory::player::PlayerFactory::new(db, &alice.discord_id, game_a.id)
        .updated_at(now)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, &alice.discord_id, game_b.id)
        .updated_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::player::PlayerFactory::new(db, &bob.discord_id, game_b.id)
        .updated_at(now - Duration::minutes(2))
        .build()
        .await?;

    let players = PlayerRepository::new(db).get_suggested(None, 20).await?;

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].user_id, alice.discord_id);
    assert_eq!(players[0].game_id, game_a.id);
    assert_eq!(players[1].user_id, bob.discord_id);

    Ok(())
}

/// Tests that the viewer is excluded and the limit is respected.
///
/// Expected: Ok(Vec<Player>) without the viewer, capped at the limit
#[tokio::test]
async fn excludes_viewer_and_caps() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let viewer = factory::create_user(db).await?;
    factory::create_player(db, &viewer.discord_id, game.id).await?;

    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        factory::create_player(db, &user.discord_id, game.id).await?;
    }

    let players = PlayerRepository::new(db)
        .get_suggested(Some(&viewer.discord_id), 2)
        .await?;

    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p.user_id != viewer.discord_id));

    Ok(())
}
