use super::*;

/// Tests fetching exams from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_exams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let exams = ExamRepository::new(db).get_all().await?;

    assert!(exams.is_empty());

    Ok(())
}

/// Tests that exams are not re-sorted by date.
///
/// The later exam is stored first; the repository must return the same order as an
/// unordered query against the table.
///
/// Expected: Ok(Vec) in store order, not date order
#[tokio::test]
async fn keeps_store_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Exam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::exam::ExamFactory::new(db)
        .id(1)
        .subject("History")
        .exam_date(date(2024, 12, 10))
        .build()
        .await?;
    factory::exam::ExamFactory::new(db)
        .id(2)
        .subject("Algebra")
        .exam_date(date(2024, 10, 1))
        .build()
        .await?;

    let exams = ExamRepository::new(db).get_all().await?;
    let store_order = entity::prelude::Exam::find().all(db).await?;

    assert_eq!(exams, store_order);
    let ids: Vec<i32> = exams.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);

    Ok(())
}
