use super::*;

/// Tests resolving a game by slug.
///
/// Expected: Ok(Some(Game)) with list columns decoded
#[tokio::test]
async fn finds_existing_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .slug("hades")
        .title("Hades")
        .genres(vec!["action", "roguelike"])
        .build()
        .await?;

    let game = GameRepository::new(db).find_by_slug("hades").await?;

    let game = game.expect("game should exist");
    assert_eq!(game.title, "Hades");
    assert_eq!(game.genres, vec!["action".to_string(), "roguelike".to_string()]);

    Ok(())
}

/// Tests resolving an unknown slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let game = GameRepository::new(db).find_by_slug("does-not-exist").await?;

    assert!(game.is_none());

    Ok(())
}
