use super::*;

/// Tests loading communities for a game, most populated first.
///
/// Expected: Ok(Vec<Community>)
#[tokio::test]
async fn returns_communities_by_population() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    factory::community::CommunityFactory::new(db, game.id)
        .online_count(10)
        .build()
        .await?;
    let busy = factory::community::CommunityFactory::new(db, game.id)
        .online_count(500)
        .build()
        .await?;
    factory::create_community(db, other.id).await?;

    let communities = CommunityRepository::new(db).get_by_game(game.id).await?;

    assert_eq!(communities.len(), 2);
    assert_eq!(communities[0].id, busy.id);
    assert_eq!(communities[0].online_count, 500);

    Ok(())
}

/// Tests that a negative online count is rejected at the mapping boundary.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_negative_online_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::community::CommunityFactory::new(db, game.id)
        .online_count(-3)
        .build()
        .await?;

    let result = CommunityRepository::new(db).get_by_game(game.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
