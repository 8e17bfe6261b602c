use super::*;

/// Tests that only the given authors' events are returned, newest first and capped.
///
/// Expected: Ok(Vec<Event>)
#[tokio::test]
async fn returns_newest_events_for_authors() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for i in 0..3 {
        factory::event::EventFactory::new(db)
            .user_id("alice")
            .title(format!("Alice {}", i))
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
    }
    factory::event::EventFactory::new(db)
        .user_id("mallory")
        .created_at(now + Duration::minutes(1))
        .build()
        .await?;

    let events = EventRepository::new(db)
        .get_recent_by_users(&["alice".to_string()], 2)
        .await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Alice 0");
    assert_eq!(events[1].title, "Alice 1");

    Ok(())
}

/// Tests that an empty author list short-circuits.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_authors_yield_no_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_event(db, "alice").await?;

    let events = EventRepository::new(db).get_recent_by_users(&[], 20).await?;

    assert!(events.is_empty());

    Ok(())
}
