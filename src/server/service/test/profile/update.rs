use super::*;

/// Tests updating the profile fields.
///
/// Expected: trimmed values stored, blank avatar cleared
#[tokio::test]
async fn updates_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Editor").await?;

    let view = ProfileService::new(db)
        .update(
            &user,
            UpdateProfileDto {
                display_name: Some("  New Name ".to_string()),
                bio: Some("Likes roguelikes".to_string()),
                avatar_url: Some("   ".to_string()),
            },
        )
        .await?;

    assert_eq!(view.profile.display_name.as_deref(), Some("New Name"));
    assert_eq!(view.profile.bio.as_deref(), Some("Likes roguelikes"));
    assert_eq!(view.profile.avatar_url, None);

    Ok(())
}

/// Tests that an overlong bio is rejected before anything is written.
///
/// Expected: Err(AppError::BadRequest) and no profile created
#[tokio::test]
async fn rejects_long_bio() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_domain_user(db, "Verbose").await?;

    let result = ProfileService::new(db)
        .update(
            &user,
            UpdateProfileDto {
                bio: Some("a".repeat(501)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Profile::find().count(db).await?, 0);

    Ok(())
}
