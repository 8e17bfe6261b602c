use super::*;

/// Tests listing with no filters.
///
/// Verifies that games are returned newest first.
///
/// Expected: Ok(Vec<Game>) ordered by created_at descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::game::GameFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::game::GameFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let repo = GameRepository::new(db);
    let games = repo.list(&GameFilter::default()).await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, newer.id);
    assert_eq!(games[1].id, older.id);

    Ok(())
}

/// Tests that equal timestamps are ordered by descending id.
///
/// Expected: Ok(Vec<Game>) with the later insert first
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now();
    let first = factory::game::GameFactory::new(db)
        .created_at(created_at)
        .build()
        .await?;
    let second = factory::game::GameFactory::new(db)
        .created_at(created_at)
        .build()
        .await?;

    let games = GameRepository::new(db).list(&GameFilter::default()).await?;

    assert_eq!(games[0].id, second.id);
    assert_eq!(games[1].id, first.id);

    Ok(())
}

/// Tests that the title query matches case-insensitive substrings.
///
/// Expected: Ok(Vec<Game>) containing only the matching title
#[tokio::test]
async fn filters_by_title_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zelda = factory::game::GameFactory::new(db)
        .title("The Legend of Zelda")
        .build()
        .await?;
    factory::game::GameFactory::new(db)
        .title("Metroid Prime")
        .build()
        .await?;

    let filter = GameFilter::new(Some("zELDa".to_string()), None, None, 24, 0);
    let games = GameRepository::new(db).list(&filter).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, zelda.id);

    Ok(())
}

/// Tests that genre and platform filters are combined with AND.
///
/// Verifies that a game must match every supplied filter, and that matching is
/// on whole list elements rather than substrings.
///
/// Expected: Ok(Vec<Game>) containing only the game matching both filters
#[tokio::test]
async fn combines_filters_conjunctively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let both = factory::game::GameFactory::new(db)
        .genres(vec!["rpg", "action"])
        .platforms(vec!["PC", "Switch"])
        .build()
        .await?;
    // Right genre, wrong platform
    factory::game::GameFactory::new(db)
        .genres(vec!["rpg"])
        .platforms(vec!["Xbox"])
        .build()
        .await?;
    // Right platform, wrong genre
    factory::game::GameFactory::new(db)
        .genres(vec!["racing"])
        .platforms(vec!["Switch"])
        .build()
        .await?;
    // Genre that merely contains the filter as a substring
    factory::game::GameFactory::new(db)
        .genres(vec!["action-rpg"])
        .platforms(vec!["Switch"])
        .build()
        .await?;

    let filter = GameFilter::new(
        None,
        Some("rpg".to_string()),
        Some("Switch".to_string()),
        24,
        0,
    );
    let games = GameRepository::new(db).list(&filter).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, both.id);

    Ok(())
}

/// Tests that list filters match exactly.
///
/// Verifies that `_` and `%` are literal characters rather than wildcards, and
/// that genre membership is case-sensitive.
///
/// Expected: Ok(Vec<Game>) empty for wildcard or case-mismatched filters
#[tokio::test]
async fn filters_match_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::game::GameFactory::new(db)
        .title("Celeste")
        .genres(vec!["action"])
        .platforms(vec!["PC"])
        .build()
        .await?;
    let repo = GameRepository::new(db);

    for filter in [
        GameFilter::new(None, Some("a_tion".to_string()), None, 24, 0),
        GameFilter::new(None, Some("%".to_string()), None, 24, 0),
        GameFilter::new(None, Some("ACTION".to_string()), None, 24, 0),
        GameFilter::new(None, None, Some("P_".to_string()), 24, 0),
        GameFilter::new(Some("%".to_string()), None, None, 24, 0),
        GameFilter::new(Some("Cel_ste".to_string()), None, None, 24, 0),
    ] {
        let games = repo.list(&filter).await?;
        assert!(games.is_empty(), "{:?} should match nothing", filter);
    }

    let exact = GameFilter::new(
        Some("celeste".to_string()),
        Some("action".to_string()),
        Some("PC".to_string()),
        24,
        0,
    );
    let games = repo.list(&exact).await?;
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, game.id);

    Ok(())
}

/// Tests limit and offset paging.
///
/// Expected: Ok(Vec<Game>) holding the requested window
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let mut ids = Vec::new();
    for i in 0..5 {
        let game = factory::game::GameFactory::new(db)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
        ids.push(game.id);
    }

    let filter = GameFilter::new(None, None, None, 2, 1);
    let games = GameRepository::new(db).list(&filter).await?;

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].id, ids[1]);
    assert_eq!(games[1].id, ids[2]);

    Ok(())
}

/// Tests listing when the game table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_game_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GameRepository::new(db).list(&GameFilter::default()).await;

    assert!(result.is_err());

    Ok(())
}
