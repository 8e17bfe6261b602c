use super::*;

/// Tests finding an existing and a missing user.
///
/// Expected: Ok(Some(User)) then Ok(None)
#[tokio::test]
async fn finds_user_by_discord_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let found = repo.find_by_discord_id(&user.discord_id).await?;
    assert_eq!(found.map(|u| u.name), Some(user.name));

    assert!(repo.find_by_discord_id("000").await?.is_none());

    Ok(())
}
