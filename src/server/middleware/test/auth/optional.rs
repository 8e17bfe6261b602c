use super::*;

/// Tests resolving an optional user with an empty session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn none_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).optional().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests resolving an optional user after logout.
///
/// Expected: Some(User) while logged in, None after the session is cleared
#[tokio::test]
async fn none_after_clear() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.discord_id.clone()).await?;

    assert!(AuthGuard::new(db, session).optional().await?.is_some());

    auth_session.clear().await;

    assert!(AuthGuard::new(db, session).optional().await?.is_none());

    Ok(())
}
