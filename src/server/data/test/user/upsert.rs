use super::*;

/// Tests creating a new user.
///
/// Expected: Ok(User) with the supplied fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            discord_id: "123456789012345678".to_string(),
            name: "Zelda".to_string(),
            avatar: Some("abc".to_string()),
        })
        .await?;

    assert_eq!(user.discord_id, "123456789012345678");
    assert_eq!(user.name, "Zelda");
    assert_eq!(user.avatar.as_deref(), Some("abc"));

    Ok(())
}

/// Tests that upserting an existing user updates it in place.
///
/// Expected: Ok(User) with new name and a single row in the table
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .name("Old Name")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            discord_id: existing.discord_id.clone(),
            name: "New Name".to_string(),
            avatar: None,
        })
        .await?;

    assert_eq!(user.name, "New Name");
    assert_eq!(user.created_at, existing.created_at);
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
