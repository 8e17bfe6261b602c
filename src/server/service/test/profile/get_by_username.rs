use super::*;

/// Tests the public profile view with stats and follow state.
///
/// Expected: stats reflect the stored rows, is_following true, is_self false
#[tokio::test]
async fn builds_view_with_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = create_domain_user(db, "Viewer").await?;
    let owner = create_domain_user(db, "Owner").await?;
    let service = ProfileService::new(db);
    let owner_profile = service.ensure_profile(&owner).await?;
    service.ensure_profile(&viewer).await?;

    let game = factory::create_game(db).await?;
    crate::server::service::game::GameService::new(db)
        .set_status(
            &owner.discord_id,
            &game.slug,
            crate::model::game::PlayStatus::Playing,
            true,
        )
        .await?;
    service.follow(&viewer, &owner_profile.username).await?;

    let view = service
        .get_by_username(&owner_profile.username, Some(&viewer.discord_id))
        .await?;

    assert_eq!(view.stats.games, 1);
    assert_eq!(view.stats.followers, 1);
    assert_eq!(view.stats.following, 0);
    assert_eq!(view.games.len(), 1);
    assert_eq!(view.events.len(), 1);
    assert!(view.is_following);
    assert!(!view.is_self);

    let dto = view.into_dto();
    assert_eq!(dto.favorite_games.len(), 1);

    Ok(())
}

/// Tests viewing your own profile through the public route.
///
/// Expected: is_self true, is_following false
#[tokio::test]
async fn marks_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Self").await?;
    let service = ProfileService::new(db);
    let profile = service.ensure_profile(&user).await?;

    let view = service
        .get_by_username(&profile.username, Some(&user.discord_id))
        .await?;

    assert!(view.is_self);
    assert!(!view.is_following);

    Ok(())
}

/// Tests an unknown username.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_username_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProfileService::new(db).get_by_username("nobody", None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
