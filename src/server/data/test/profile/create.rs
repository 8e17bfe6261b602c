use super::*;

/// Tests inserting a profile.
///
/// Expected: Ok(true) and a stored profile with no bio
#[tokio::test]
async fn inserts_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ProfileRepository::new(db);

    let inserted = repo
        .insert_if_absent(CreateProfileParam {
            user_id: user.discord_id.clone(),
            username: "link".to_string(),
            display_name: Some("Link".to_string()),
            avatar_url: None,
        })
        .await?;

    assert!(inserted);

    let profile = repo.find_by_user_id(&user.discord_id).await?.unwrap();
    assert_eq!(profile.username, "link");
    assert_eq!(profile.display_name.as_deref(), Some("Link"));
    assert!(profile.bio.is_none());

    Ok(())
}

/// Tests inserting a username that is already taken.
///
/// Expected: Ok(false) and no profile for the second identity
#[tokio::test]
async fn skips_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_user_with_profile(db).await?;
    let other = factory::create_user(db).await?;
    let repo = ProfileRepository::new(db);

    let inserted = repo
        .insert_if_absent(CreateProfileParam {
            user_id: other.discord_id.clone(),
            username: existing.username,
            display_name: None,
            avatar_url: None,
        })
        .await?;

    assert!(!inserted);
    assert!(repo.find_by_user_id(&other.discord_id).await?.is_none());

    Ok(())
}

/// Tests inserting a second profile for the same identity.
///
/// Expected: Ok(false) and the original profile untouched
#[tokio::test]
async fn skips_second_profile_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, existing) = factory::helpers::create_user_with_profile(db).await?;
    let repo = ProfileRepository::new(db);

    let inserted = repo
        .insert_if_absent(CreateProfileParam {
            user_id: user.discord_id.clone(),
            username: "someone-else".to_string(),
            display_name: None,
            avatar_url: None,
        })
        .await?;

    assert!(!inserted);

    let profile = repo.find_by_user_id(&user.discord_id).await?.unwrap();
    assert_eq!(profile.id, existing.id);
    assert_eq!(profile.username, existing.username);

    Ok(())
}
