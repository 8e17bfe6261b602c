use super::*;

/// Tests unfollowing, including a follow that never existed.
///
/// Expected: Ok(()) both times and no remaining follow
#[tokio::test]
async fn unfollow_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FollowRepository::new(db);
    repo.follow("alice", "bob").await?;

    repo.unfollow("alice", "bob").await?;
    repo.unfollow("alice", "bob").await?;

    assert!(!repo.is_following("alice", "bob").await?);
    assert_eq!(repo.count_followers("bob").await?, 0);

    Ok(())
}
