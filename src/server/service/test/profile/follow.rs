use super::*;

/// Tests following another profile.
///
/// Verifies that a followed event is recorded once even when following twice.
///
/// Expected: Ok(()) both times, one follow row, one event
#[tokio::test]
async fn follows_once_and_records_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Follower").await?;
    let target = factory::user::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, &target.discord_id)
        .username("target")
        .display_name(Some("Target Player"))
        .build()
        .await?;
    let service = ProfileService::new(db);

    service.follow(&user, "target").await?;
    service.follow(&user, "target").await?;

    assert_eq!(Follow::find().count(db).await?, 1);

    let events = Event::find().all(db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::Followed.as_str());
    assert_eq!(events[0].title, "Started following Target Player");

    Ok(())
}

/// Tests following your own profile.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn cannot_follow_self() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Narcissus").await?;
    let service = ProfileService::new(db);
    let profile = service.ensure_profile(&user).await?;

    let result = service.follow(&user, &profile.username).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Follow::find().count(db).await?, 0);

    Ok(())
}

/// Tests following a username that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_target_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Lonely").await?;

    let result = ProfileService::new(db).follow(&user, "ghost").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests unfollowing, including when not following.
///
/// Expected: Ok(()) both times and no follow row left
#[tokio::test]
async fn unfollow_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Fickle").await?;
    let target = factory::user::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, &target.discord_id)
        .username("target")
        .build()
        .await?;
    let service = ProfileService::new(db);

    service.follow(&user, "target").await?;
    service.unfollow(&user, "target").await?;
    service.unfollow(&user, "target").await?;

    assert_eq!(Follow::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the follow is rolled back when the event cannot be stored.
///
/// Expected: Err(AppError::DbErr) and no follow row
#[tokio::test]
async fn rolls_back_when_event_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(Follow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Follower").await?;
    let target = factory::user::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, &target.discord_id)
        .username("target")
        .build()
        .await?;

    let result = ProfileService::new(db).follow(&user, "target").await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(Follow::find().count(db).await?, 0);

    Ok(())
}
