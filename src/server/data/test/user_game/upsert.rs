use super::*;

/// Tests that setting a status twice replaces the first entry.
///
/// Expected: Ok(UserGame) with the latest status and one tracked game
#[tokio::test]
async fn replaces_existing_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let repo = UserGameRepository::new(db);

    repo.upsert(SetGameStatusParam {
        user_id: "alice".to_string(),
        game_id: game.id,
        status: PlayStatus::Wishlist,
        favorite: false,
    })
    .await?;
    let updated = repo
        .upsert(SetGameStatusParam {
            user_id: "alice".to_string(),
            game_id: game.id,
            status: PlayStatus::Playing,
            favorite: true,
        })
        .await?;

    assert_eq!(updated.status, PlayStatus::Playing);
    assert!(updated.favorite);
    assert_eq!(repo.count_by_user("alice").await?, 1);

    let found = repo.find("alice", game.id).await?.unwrap();
    assert_eq!(found.status, PlayStatus::Playing);
    assert!(repo.find("bob", game.id).await?.is_none());

    Ok(())
}
