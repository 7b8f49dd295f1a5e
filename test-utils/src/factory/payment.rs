//! Payment factory for creating test payment rows.

use crate::factory::helpers::{date, next_i32};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating payment rows with customizable fields.
///
/// Defaults:
/// - id: assigned by the database
/// - student_id: unique counter value
/// - amount: `250.0`
/// - method: `"cash"`
/// - paid_on: 2024-09-05
pub struct PaymentFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    student_id: i32,
    amount: f64,
    method: String,
    paid_on: NaiveDate,
}

impl<'a> PaymentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            student_id: next_i32(),
            amount: 250.0,
            method: "cash".to_string(),
            paid_on: date(2024, 9, 5),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn student_id(mut self, student_id: i32) -> Self {
        self.student_id = student_id;
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn paid_on(mut self, paid_on: NaiveDate) -> Self {
        self.paid_on = paid_on;
        self
    }

    /// Builds and inserts the payment row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::payment::Model)` - Created payment row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::payment::Model, DbErr> {
        entity::payment::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            student_id: ActiveValue::Set(self.student_id),
            amount: ActiveValue::Set(self.amount),
            method: ActiveValue::Set(self.method),
            paid_on: ActiveValue::Set(self.paid_on),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payment with default values.
pub async fn create_payment(db: &DatabaseConnection) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db).build().await
}

/// Creates a payment with a specific id and amount.
pub async fn create_payment_with_amount(
    db: &DatabaseConnection,
    id: i32,
    amount: f64,
) -> Result<entity::payment::Model, DbErr> {
    PaymentFactory::new(db).id(id).amount(amount).build().await
}
