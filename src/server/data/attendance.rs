//! Attendance data repository for database operations.
//!
//! Provides the `AttendanceRepository` for reading attendance records. Rows are returned
//! as entity models exactly as stored.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Repository providing read access to attendance records.
pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    /// Creates a new AttendanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AttendanceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every attendance record.
    ///
    /// No ordering is applied; rows come back in whatever order the store yields them.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All attendance records (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::attendance::Model>, DbErr> {
        entity::prelude::Attendance::find().all(self.db).await
    }
}
