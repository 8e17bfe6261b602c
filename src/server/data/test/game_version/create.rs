use super::*;

/// Tests creating versions and reading the latest ones back.
///
/// Expected: Ok(Vec<GameVersion>) capped at the limit
#[tokio::test]
async fn creates_and_lists_versions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = GameVersionRepository::new(db);

    repo.create(game.id, "1.0".to_string(), None).await?;
    repo.create(game.id, "1.1".to_string(), Some("Fixes".to_string()))
        .await?;

    assert!(repo.exists(game.id, "1.0").await?);
    assert!(!repo.exists(game.id, "2.0").await?);

    let versions = repo.get_latest_by_game(game.id, 1).await?;
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].version, "1.1");

    Ok(())
}

/// Tests that version lookups are scoped to their game.
///
/// Expected: Ok(false) for the same version string on another game
#[tokio::test]
async fn exists_is_scoped_to_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let repo = GameVersionRepository::new(db);

    repo.create(game.id, "1.0".to_string(), None).await?;

    assert!(repo.exists(game.id, "1.0").await?);
    assert!(!repo.exists(other.id, "1.0").await?);

    Ok(())
}
