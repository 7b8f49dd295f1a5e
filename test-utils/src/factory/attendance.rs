//! Attendance factory for creating test attendance rows.

use crate::factory::helpers::{date, next_i32};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance rows with customizable fields.
///
/// Defaults:
/// - id: assigned by the database
/// - student_id: unique counter value
/// - date: 2024-09-02
/// - status: `"present"`
/// - remarks: `None`
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    student_id: i32,
    date: NaiveDate,
    status: String,
    remarks: Option<String>,
}

impl<'a> AttendanceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            student_id: next_i32(),
            date: date(2024, 9, 2),
            status: "present".to_string(),
            remarks: None,
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

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Builds and inserts the attendance row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attendance::Model)` - Created attendance row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            student_id: ActiveValue::Set(self.student_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            remarks: ActiveValue::Set(self.remarks),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attendance row with default values.
pub async fn create_attendance(
    db: &DatabaseConnection,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db).build().await
}
