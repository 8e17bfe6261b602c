use super::*;

/// Tests listing and counting guides written by one user.
///
/// Expected: Ok(Vec<Guide>) and a matching count
#[tokio::test]
async fn returns_guides_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::guide::GuideFactory::new(db, game.id)
        .created_by("alice")
        .build()
        .await?;
    factory::create_guide(db, game.id).await?;

    let repo = GuideRepository::new(db);

    assert_eq!(repo.get_by_author("alice").await?.len(), 1);
    assert_eq!(repo.count_by_author("alice").await?, 1);
    assert_eq!(repo.count_by_author("bob").await?, 0);

    Ok(())
}
