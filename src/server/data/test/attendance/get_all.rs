use super::*;

/// Tests fetching attendance from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let records = AttendanceRepository::new(db).get_all().await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests fetching every stored attendance record unmodified.
///
/// Verifies that all rows come back with their stored field values, including
/// optional remarks.
///
/// Expected: Ok(Vec) equal to the inserted rows
#[tokio::test]
async fn returns_all_records_unmodified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Attendance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let present = factory::attendance::AttendanceFactory::new(db)
        .student_id(1)
        .status("present")
        .build()
        .await?;
    let absent = factory::attendance::AttendanceFactory::new(db)
        .student_id(2)
        .status("absent")
        .remarks("Medical leave")
        .build()
        .await?;

    let records = AttendanceRepository::new(db).get_all().await?;

    assert_eq!(records, vec![present, absent]);

    Ok(())
}

/// Tests that a missing table surfaces as an error instead of an empty result.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AttendanceRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
