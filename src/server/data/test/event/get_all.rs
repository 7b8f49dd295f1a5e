use super::*;

/// Tests fetching events from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let events = EventRepository::new(db).get_all().await?;

    assert!(events.is_empty());

    Ok(())
}

/// Tests that events are ordered by date rather than by insertion or id.
///
/// Inserts three events whose ids run opposite to their dates.
///
/// Expected: Ok(Vec) sorted ascending by date
#[tokio::test]
async fn orders_events_by_date_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_event_on(db, 1, date(2024, 3, 1)).await?;
    factory::create_event_on(db, 2, date(2024, 1, 1)).await?;
    factory::create_event_on(db, 3, date(2024, 2, 15)).await?;

    let events = EventRepository::new(db).get_all().await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));

    Ok(())
}

/// Tests that optional event fields round-trip from the store unchanged.
///
/// Expected: Ok(Vec) containing the event with description and location intact
#[tokio::test]
async fn returns_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::event::EventFactory::new(db)
        .title("Science Fair")
        .description("Projects from every grade")
        .location("Main hall")
        .date(date(2024, 5, 20))
        .build()
        .await?;

    let events = EventRepository::new(db).get_all().await?;

    assert_eq!(events, vec![stored]);

    Ok(())
}

/// Tests that a missing table surfaces as an error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
