use super::*;

/// Tests that similar games share a genre and exclude the game itself.
///
/// Expected: Ok(Vec<Game>) without the source game or unrelated genres
#[tokio::test]
async fn excludes_self_and_unrelated_genres() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source = factory::game::GameFactory::new(db)
        .genres(vec!["rpg", "action"])
        .build()
        .await?;
    let shares_action = factory::game::GameFactory::new(db)
        .genres(vec!["action"])
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .genres(vec!["puzzle"])
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let source = repo.find_by_slug(&source.slug).await?.unwrap();
    let similar = repo.find_similar(&source, 8).await?;

    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].id, shares_action.id);
    assert!(similar.iter().all(|g| g.id != source.id));

    Ok(())
}

/// Tests that similar games respect the cap and come newest first.
///
/// Expected: Ok(Vec<Game>) with exactly `limit` newest games
#[tokio::test]
async fn caps_results_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let source = factory::game::GameFactory::new(db)
        .genres(vec!["rpg"])
        .created_at(now)
        .build()
        .await?;

    let mut others = Vec::new();
    for i in 1..=10 {
        let game = factory::game::GameFactory::new(db)
            .genres(vec!["rpg"])
            .created_at(now - Duration::hours(i))
            .build()
            .await?;
        others.push(game.id);
    }

    let repo = GameRepository::new(db);
    let source = repo.find_by_slug(&source.slug).await?.unwrap();
    let similar = repo.find_similar(&source, 8).await?;

    assert_eq!(similar.len(), 8);
    let ids: Vec<i32> = similar.iter().map(|g| g.id).collect();
    assert_eq!(ids, others[..8].to_vec());

    Ok(())
}

/// Tests a game without genres.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn no_genres_means_no_similar_games() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source = factory::game::GameFactory::new(db)
        .genres(vec![])
        .build()
        .await?;
    factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let source = repo.find_by_slug(&source.slug).await?.unwrap();

    assert!(repo.find_similar(&source, 8).await?.is_empty());

    Ok(())
}
