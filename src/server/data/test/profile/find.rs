use super::*;

/// Tests lookups by identity and by username.
///
/// Expected: Ok(Some(Profile)) for both keys
#[tokio::test]
async fn finds_by_user_id_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, profile) = factory::helpers::create_user_with_profile(db).await?;
    let repo = ProfileRepository::new(db);

    let by_user = repo.find_by_user_id(&user.discord_id).await?.unwrap();
    let by_username = repo.find_by_username(&profile.username).await?.unwrap();

    assert_eq!(by_user.id, profile.id);
    assert_eq!(by_username.id, profile.id);

    Ok(())
}

/// Tests batch lookup skipping identities without a profile.
///
/// Expected: Ok(Vec<Profile>) containing only existing profiles
#[tokio::test]
async fn batch_lookup_skips_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::helpers::create_user_with_profile(db).await?;
    let no_profile = factory::create_user(db).await?;

    let profiles = ProfileRepository::new(db)
        .find_by_user_ids(&[user.discord_id.clone(), no_profile.discord_id.clone()])
        .await?;

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].user_id, user.discord_id);

    Ok(())
}
