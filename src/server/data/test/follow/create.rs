use super::*;

/// Tests that following twice records a single follow.
///
/// Expected: Ok(true) then Ok(false), with one follower counted
#[tokio::test]
async fn follow_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FollowRepository::new(db);

    assert!(repo.follow("alice", "bob").await?);
    assert!(!repo.follow("alice", "bob").await?);

    assert!(repo.is_following("alice", "bob").await?);
    assert!(!repo.is_following("bob", "alice").await?);
    assert_eq!(repo.count_followers("bob").await?, 1);
    assert_eq!(repo.count_following("alice").await?, 1);
    assert_eq!(repo.get_followee_ids("alice").await?, vec!["bob".to_string()]);

    Ok(())
}
