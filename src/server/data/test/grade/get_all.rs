use super::*;

/// Tests fetching every stored grade.
///
/// Expected: Ok(Vec) containing each inserted grade once
#[tokio::test]
async fn returns_all_grades() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Grade)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let maths = factory::grade::GradeFactory::new(db)
        .subject("Mathematics")
        .score(91.0)
        .build()
        .await?;
    let art = factory::create_grade(db).await?;

    let grades = GradeRepository::new(db).get_all().await?;

    assert_eq!(grades.len(), 2);
    assert!(grades.contains(&maths));
    assert!(grades.contains(&art));

    Ok(())
}

/// Tests that a missing table surfaces as an error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_table_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GradeRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
