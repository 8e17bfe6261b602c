use super::*;

/// Tests requiring a user with an empty session.
///
/// Expected: Err(AuthError::UserNotInSession) rendered as 401
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    let Err(err) = result else {
        panic!("expected an error for an empty session");
    };
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UserNotInSession)
    ));
    assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests requiring a user whose identity is stored in the session.
///
/// Expected: Ok(User) with the stored identity
#[tokio::test]
async fn returns_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await?;
    AuthSession::new(session)
        .set_user_id(user.discord_id.clone())
        .await?;

    let resolved = AuthGuard::new(db, session).require().await?;

    assert_eq!(resolved.discord_id, "123456789");

    Ok(())
}

/// Tests requiring a user whose session points at a missing user row.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_user_id("999".to_string())
        .await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}
