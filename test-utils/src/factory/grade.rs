//! Grade factory for creating test grade rows.

use crate::factory::helpers::{next_i32, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating grade rows with customizable fields.
///
/// Defaults:
/// - id: assigned by the database
/// - student_id: unique counter value
/// - subject: `"Subject {n}"`
/// - score: `75.0`
/// - term: `"Term 1"`
pub struct GradeFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    student_id: i32,
    subject: String,
    score: f64,
    term: String,
}

impl<'a> GradeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            student_id: next_i32(),
            subject: format!("Subject {}", next_id()),
            score: 75.0,
            term: "Term 1".to_string(),
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

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Builds and inserts the grade row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::grade::Model)` - Created grade row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::grade::Model, DbErr> {
        entity::grade::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            student_id: ActiveValue::Set(self.student_id),
            subject: ActiveValue::Set(self.subject),
            score: ActiveValue::Set(self.score),
            term: ActiveValue::Set(self.term),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a grade with default values.
pub async fn create_grade(db: &DatabaseConnection) -> Result<entity::grade::Model, DbErr> {
    GradeFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_grade_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Grade).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let grade = GradeFactory::new(db)
            .student_id(11)
            .subject("Physics")
            .score(88.5)
            .term("Term 2")
            .build()
            .await?;

        assert_eq!(grade.student_id, 11);
        assert_eq!(grade.subject, "Physics");
        assert_eq!(grade.score, 88.5);
        assert_eq!(grade.term, "Term 2");

        Ok(())
    }
}
