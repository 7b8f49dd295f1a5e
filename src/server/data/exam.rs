//! Exam data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing read access to scheduled exams.
pub struct ExamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamRepository<'a> {
    /// Creates a new ExamRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every exam in store order.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All exams (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::exam::Model>, DbErr> {
        entity::prelude::Exam::find().all(self.db).await
    }
}
