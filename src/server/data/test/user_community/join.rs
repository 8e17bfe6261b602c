use super::*;

/// Tests that joining twice records one membership.
///
/// Expected: Ok(true) then Ok(false), one community id
#[tokio::test]
async fn join_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let community = factory::create_community(db, game.id).await?;
    let repo = UserCommunityRepository::new(db);

    assert!(repo.join("alice", community.id).await?);
    assert!(!repo.join("alice", community.id).await?);

    assert_eq!(repo.get_community_ids("alice").await?, vec![community.id]);
    assert_eq!(repo.count_by_user("alice").await?, 1);

    Ok(())
}
