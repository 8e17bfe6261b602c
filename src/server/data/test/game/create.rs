use super::*;

/// Tests creating a game with list columns.
///
/// Expected: Ok(Game) readable by slug
#[tokio::test]
async fn creates_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let created = repo
        .create(CreateGameParam {
            slug: "celeste".to_string(),
            title: "Celeste".to_string(),
            description: None,
            cover_url: None,
            platforms: vec!["PC".to_string()],
            genres: vec!["platformer".to_string()],
            tags: vec![],
        })
        .await?;

    let found = repo.find_by_slug("celeste").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.platforms, vec!["PC".to_string()]);
    assert!(found.tags.is_empty());

    Ok(())
}

/// Tests the unique slug constraint.
///
/// Expected: Err(DbErr) on duplicate slug
#[tokio::test]
async fn rejects_duplicate_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_game(db).await?;

    let result = GameRepository::new(db)
        .create(CreateGameParam {
            slug: existing.slug.clone(),
            title: "Duplicate".to_string(),
            description: None,
            cover_url: None,
            platforms: vec![],
            genres: vec![],
            tags: vec![],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
