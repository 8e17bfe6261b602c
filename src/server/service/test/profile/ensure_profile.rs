use super::*;

/// Tests creating a profile from the Discord name.
///
/// Expected: username is the slugified name, display name the raw name
#[tokio::test]
async fn derives_username_from_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Zelda Fan!").await?;

    let profile = ProfileService::new(db).ensure_profile(&user).await?;

    assert_eq!(profile.username, "zelda-fan");
    assert_eq!(profile.display_name.as_deref(), Some("Zelda Fan!"));
    assert_eq!(profile.user_id, user.discord_id);

    Ok(())
}

/// Tests that a taken username falls back to the identity prefix.
///
/// Expected: username `player-` + first 8 identity characters
#[tokio::test]
async fn falls_back_when_username_taken() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_domain_user(db, "Link").await?;
    let service = ProfileService::new(db);
    service.ensure_profile(&first).await?;

    let entity = factory::user::UserFactory::new(db)
        .discord_id("123456789012345678")
        .name("Link")
        .build()
        .await?;
    let second = crate::server::model::user::User::from_entity(entity);

    let profile = service.ensure_profile(&second).await?;

    assert_eq!(profile.username, "player-12345678");

    Ok(())
}

/// Tests that a name with no usable characters falls back.
///
/// Expected: username `player-` + first 8 identity characters
#[tokio::test]
async fn falls_back_when_name_has_no_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::user::UserFactory::new(db)
        .discord_id("555555555512345678")
        .name("???")
        .build()
        .await?;
    let user = crate::server::model::user::User::from_entity(entity);

    let profile = ProfileService::new(db).ensure_profile(&user).await?;

    assert_eq!(profile.username, "player-55555555");

    Ok(())
}

/// Tests that calling ensure_profile twice returns the same profile.
///
/// Expected: one profile row, same id both times
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Samus").await?;
    let service = ProfileService::new(db);

    let first = service.ensure_profile(&user).await?;
    let second = service.ensure_profile(&user).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(Profile::find().count(db).await?, 1);

    Ok(())
}

/// Tests two first-use calls for the same user running concurrently.
///
/// Expected: both return the same profile and one row is stored
#[tokio::test]
async fn concurrent_first_use_creates_one_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Ness").await?;
    let service = ProfileService::new(db);

    let (first, second) = tokio::join!(service.ensure_profile(&user), service.ensure_profile(&user));
    let (first, second) = (first?, second?);

    assert_eq!(first.id, second.id);
    assert_eq!(first.username, "ness");
    assert_eq!(Profile::find().count(db).await?, 1);

    Ok(())
}

/// Tests two users whose short fallback usernames collide.
///
/// Expected: the second user gets `player-` + the full identity
#[tokio::test]
async fn falls_back_to_full_identity_when_short_fallback_taken() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProfileService::new(db);
    let mut profiles = Vec::new();
    for discord_id in ["111111110000000001", "111111110000000002"] {
        let entity = factory::user::UserFactory::new(db)
            .discord_id(discord_id)
            .name("!!!")
            .build()
            .await?;
        let user = crate::server::model::user::User::from_entity(entity);
        profiles.push(service.ensure_profile(&user).await?);
    }

    assert_eq!(profiles[0].username, "player-11111111");
    assert_eq!(profiles[1].username, "player-111111110000000002");

    Ok(())
}
