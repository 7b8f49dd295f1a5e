//! Event data repository for database operations.
//!
//! Provides the `EventRepository` for reading school events. Events are the only
//! collection served in a defined order: ascending by date.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

/// Repository providing read access to events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every event ordered by date, earliest first.
    ///
    /// Events sharing a date keep the relative order the store yields for them.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All events sorted ascending by date (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Date)
            .all(self.db)
            .await
    }
}
