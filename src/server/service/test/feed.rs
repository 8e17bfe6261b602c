use super::create_domain_user;
use crate::server::{data::follow::FollowRepository, error::AppError, service::feed::FeedService};
use chrono::{Duration, Utc};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

/// Tests that the feed only contains events by followed users, newest first.
///
/// Expected: Ok(Feed) with the followee's events only
#[tokio::test]
async fn contains_only_followed_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Reader").await?;
    let followee = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, &followee.discord_id)
        .username("friend")
        .build()
        .await?;
    crate::server::service::profile::ProfileService::new(db)
        .follow(&user, "friend")
        .await?;

    let now = Utc::now();
    factory::event::EventFactory::new(db)
        .user_id(&followee.discord_id)
        .title("older")
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .user_id(&followee.discord_id)
        .title("newer")
        .created_at(now)
        .build()
        .await?;
    factory::create_event(db, &stranger.discord_id).await?;

    let feed = FeedService::new(db).get_feed(&user).await?;

    assert_eq!(feed.following_count, 1);
    assert_eq!(feed.events.len(), 2);
    assert_eq!(feed.events[0].event.title, "newer");
    assert_eq!(feed.events[1].event.title, "older");
    assert_eq!(
        feed.events[0].author.as_ref().map(|p| p.username.as_str()),
        Some("friend")
    );

    Ok(())
}

/// Tests that the feed is capped at 20 events.
///
/// Expected: 20 events
#[tokio::test]
async fn caps_at_twenty_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Reader").await?;
    let followee = factory::user::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, &followee.discord_id)
        .username("prolific")
        .build()
        .await?;
    crate::server::service::profile::ProfileService::new(db)
        .follow(&user, "prolific")
        .await?;

    for _ in 0..25 {
        factory::create_event(db, &followee.discord_id).await?;
    }

    let feed = FeedService::new(db).get_feed(&user).await?;

    assert_eq!(feed.events.len(), 20);

    Ok(())
}

/// Tests a user who follows nobody.
///
/// Expected: Ok(Feed) with no events and a created profile
#[tokio::test]
async fn empty_without_follows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Newcomer").await?;

    let feed = FeedService::new(db).get_feed(&user).await?;

    assert!(feed.events.is_empty());
    assert_eq!(feed.following_count, 0);
    assert_eq!(feed.profile.username, "newcomer");

    Ok(())
}

/// Tests that a failing feed query is an error rather than an empty feed.
///
/// The event table is left out of the schema, so loading events for the
/// followed user fails.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn query_failure_is_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_table(Follow)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Unlucky").await?;
    let followee = factory::user::create_user(db).await?;
    FollowRepository::new(db)
        .follow(&user.discord_id, &followee.discord_id)
        .await?;

    let result = FeedService::new(db).get_feed(&user).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
