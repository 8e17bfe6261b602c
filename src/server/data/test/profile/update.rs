use super::*;

/// Tests updating editable fields while the username stays untouched.
///
/// Expected: Ok(Some(Profile)) with new values and the original username
#[tokio::test]
async fn updates_fields_but_not_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, profile) = factory::helpers::create_user_with_profile(db).await?;

    let updated = ProfileRepository::new(db)
        .update(
            &user.discord_id,
            UpdateProfileParam {
                display_name: None,
                bio: Some("Speedrunner".to_string()),
                avatar_url: Some("https://example.com/a.png".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, profile.username);
    assert!(updated.display_name.is_none());
    assert_eq!(updated.bio.as_deref(), Some("Speedrunner"));
    assert!(updated.updated_at >= profile.updated_at);

    Ok(())
}

/// Tests updating a user without a profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = ProfileRepository::new(db)
        .update(
            &user.discord_id,
            UpdateProfileParam {
                display_name: None,
                bio: None,
                avatar_url: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
