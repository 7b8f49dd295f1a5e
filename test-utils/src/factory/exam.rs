//! Exam factory for creating test exam rows.

use crate::factory::helpers::{date, next_id};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating exam rows with customizable fields.
///
/// Defaults:
/// - id: assigned by the database
/// - subject: `"Subject {n}"`
/// - class_name: `"Grade 10"`
/// - exam_date: 2024-11-15
/// - max_marks: `100`
pub struct ExamFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    subject: String,
    class_name: String,
    exam_date: NaiveDate,
    max_marks: i32,
}

impl<'a> ExamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            subject: format!("Subject {}", next_id()),
            class_name: "Grade 10".to_string(),
            exam_date: date(2024, 11, 15),
            max_marks: 100,
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn exam_date(mut self, exam_date: NaiveDate) -> Self {
        self.exam_date = exam_date;
        self
    }

    pub fn max_marks(mut self, max_marks: i32) -> Self {
        self.max_marks = max_marks;
        self
    }

    /// Builds and inserts the exam row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::exam::Model)` - Created exam row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::exam::Model, DbErr> {
        entity::exam::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            subject: ActiveValue::Set(self.subject),
            class_name: ActiveValue::Set(self.class_name),
            exam_date: ActiveValue::Set(self.exam_date),
            max_marks: ActiveValue::Set(self.max_marks),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an exam with default values.
pub async fn create_exam(db: &DatabaseConnection) -> Result<entity::exam::Model, DbErr> {
    ExamFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_exam_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Exam).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let exam = create_exam(db).await?;

        assert!(exam.id > 0);
        assert_eq!(exam.max_marks, 100);
        assert_eq!(exam.class_name, "Grade 10");

        Ok(())
    }
}
