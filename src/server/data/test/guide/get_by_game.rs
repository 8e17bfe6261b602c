use super::*;

/// Tests guides and play guides are scoped to their game.
///
/// Expected: Ok(Vec<_>) with only the requested game's rows
#[tokio::test]
async fn returns_guides_for_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    let guide = factory::create_guide(db, game.id).await?;
    factory::create_guide(db, other.id).await?;
    let play_guide = factory::create_play_guide(db, game.id).await?;

    let guides = GuideRepository::new(db).get_by_game(game.id).await?;
    let play_guides = PlayGuideRepository::new(db).get_by_game(game.id).await?;

    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].id, guide.id);
    assert_eq!(play_guides.len(), 1);
    assert_eq!(play_guides[0].steps, play_guide.steps.0);

    Ok(())
}
