use super::*;

/// Tests the detail view with every slice populated.
///
/// Verifies that each section is ok, players have resolved display names, and
/// similar games exclude the game itself.
///
/// Expected: Ok(GameDetail) with all sections ok
#[tokio::test]
async fn populates_every_section() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (game, user) = factory::helpers::create_game_with_dependencies(db).await?;
    factory::profile::ProfileFactory::new(db, &user.discord_id)
        .username("link")
        .display_name(None)
        .build()
        .await?;
    let similar = factory::game::GameFactory::new(db)
        .genres(vec!["action"])
        .build()
        .await?;

    let detail = GameService::new(db).get_detail(&game.slug, None).await?;

    assert_eq!(detail.game.id, game.id);
    assert_eq!(detail.communities.clone().ok().map(|c| c.len()), Some(1));
    assert_eq!(detail.guides.clone().ok().map(|g| g.len()), Some(1));
    assert_eq!(detail.play_guides.clone().ok().map(|g| g.len()), Some(1));
    assert!(detail.versions.is_ok());

    let players = detail.players.clone().ok().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].display_name, "link");
    assert_eq!(players[0].player.status, PlayerStatus::Online);

    let similar_games = detail.similar_games.clone().ok().unwrap();
    assert_eq!(similar_games.len(), 1);
    assert_eq!(similar_games[0].id, similar.id);
    assert_eq!(detail.viewer_status, Section::Ok(None));

    Ok(())
}

/// Tests that players without a profile get the placeholder name.
///
/// Expected: display name "Player " + first 8 identity characters
#[tokio::test]
async fn players_without_profile_get_placeholder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let user = factory::user::UserFactory::new(db)
        .discord_id("987654321012345678")
        .build()
        .await?;
    factory::create_player(db, &user.discord_id, game.id).await?;

    let detail = GameService::new(db).get_detail(&game.slug, None).await?;
    let players = detail.players.ok().unwrap();

    assert_eq!(players[0].display_name, "Player 98765432");

    Ok(())
}

/// Tests that a failing sub-fetch yields an error section while the others populate.
///
/// The guide table is left out of the schema so the guides query fails.
///
/// Expected: guides is an error section, communities is ok
#[tokio::test]
async fn failing_slice_becomes_error_section() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(Game)
        .with_table(Community)
        .with_table(PlayGuide)
        .with_table(Player)
        .with_table(GameVersion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_community(db, game.id).await?;

    let detail = GameService::new(db).get_detail(&game.slug, None).await?;

    assert!(!detail.guides.is_ok());
    assert_eq!(detail.communities.clone().ok().map(|c| c.len()), Some(1));
    assert!(detail.players.is_ok());
    assert!(detail.similar_games.is_ok());

    let dto = detail.into_dto();
    assert_eq!(dto.guides.error(), Some("Failed to load guides"));
    assert!(dto.guides.data().is_none());

    Ok(())
}

/// Tests an unknown slug.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_slug_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_game(db).await?;

    let result = GameService::new(db).get_detail("no-such-game", None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the viewer's tracked status is included.
///
/// Expected: ok section holding the viewer's UserGame
#[tokio::test]
async fn includes_viewer_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let viewer = create_domain_user(db, "Viewer").await?;
    let service = GameService::new(db);

    service
        .set_status(&viewer.discord_id, &game.slug, PlayStatus::Backlog, true)
        .await?;

    let detail = service
        .get_detail(&game.slug, Some(&viewer.discord_id))
        .await?;
    let status = detail.viewer_status.ok().flatten().unwrap();

    assert_eq!(status.status, PlayStatus::Backlog);
    assert!(status.favorite);

    Ok(())
}

/// Tests that a failing viewer status lookup is reported, not hidden.
///
/// The user_game table is left out of the schema so the lookup fails.
///
/// Expected: viewer_status is an error section while the other sections populate
#[tokio::test]
async fn failing_viewer_status_becomes_error_section() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::create_community(db, game.id).await?;
    let viewer = create_domain_user(db, "Viewer").await?;

    let detail = GameService::new(db)
        .get_detail(&game.slug, Some(&viewer.discord_id))
        .await?;

    assert!(!detail.viewer_status.is_ok());
    assert_eq!(detail.communities.clone().ok().map(|c| c.len()), Some(1));

    let dto = detail.into_dto();
    assert_eq!(
        dto.viewer_status.error(),
        Some("Failed to load your play status")
    );

    Ok(())
}
