//! Payment data repository for database operations.
//!
//! Provides the `PaymentRepository` backing the finance routes. Amounts are returned as
//! stored; no currency formatting or aggregation happens at this layer.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing read access to fee payments.
pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    /// Creates a new PaymentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PaymentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every payment in store order.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All payments (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find().all(self.db).await
    }
}
