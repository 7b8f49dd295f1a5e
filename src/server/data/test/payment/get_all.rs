use super::*;

/// Tests fetching payments from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payments = PaymentRepository::new(db).get_all().await?;

    assert!(payments.is_empty());

    Ok(())
}

/// Tests fetching stored payments with their amounts intact.
///
/// Expected: Ok(Vec) with both payments and unchanged amounts
#[tokio::test]
async fn returns_all_payments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_payment_with_amount(db, 1, 100.0).await?;
    let second = factory::create_payment_with_amount(db, 2, 50.0).await?;

    let payments = PaymentRepository::new(db).get_all().await?;

    assert_eq!(payments, vec![first, second]);
    assert_eq!(payments[0].amount, 100.0);
    assert_eq!(payments[1].amount, 50.0);

    Ok(())
}
