//! Grade data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing read access to student grades.
pub struct GradeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every grade in store order.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All grades (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::grade::Model>, DbErr> {
        entity::prelude::Grade::find().all(self.db).await
    }
}
