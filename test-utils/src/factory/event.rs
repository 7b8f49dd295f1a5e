//! Event factory for creating test event rows.

use crate::factory::helpers::{date, next_id};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating event rows with customizable fields.
///
/// Defaults:
/// - id: assigned by the database
/// - title: `"Event {n}"`
/// - description / location: `None`
/// - date: 2024-09-01
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    title: String,
    description: Option<String>,
    date: NaiveDate,
    location: Option<String>,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            title: format!("Event {}", next_id()),
            description: None,
            date: date(2024, 9, 1),
            location: None,
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builds and inserts the event row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: self.id.map_or(ActiveValue::NotSet, ActiveValue::Set),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            date: ActiveValue::Set(self.date),
            location: ActiveValue::Set(self.location),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

/// Creates an event with a specific id and date.
///
/// Shorthand for ordering tests where only the id and the date matter.
pub async fn create_event_on(
    db: &DatabaseConnection,
    id: i32,
    date: NaiveDate,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).id(id).date(date).build().await
}
