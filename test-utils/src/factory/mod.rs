//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating record rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let exam = factory::create_exam(&db).await?;
//!
//!     // Customize the fields a test cares about
//!     let event = factory::event::EventFactory::new(&db)
//!         .title("Sports Day")
//!         .date(factory::helpers::date(2024, 3, 1))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `attendance` - Create attendance rows
//! - `event` - Create event rows
//! - `exam` - Create exam rows
//! - `payment` - Create payment rows
//! - `grade` - Create grade rows
//! - `helpers` - Unique id counter and date construction

pub mod attendance;
pub mod event;
pub mod exam;
pub mod grade;
pub mod helpers;
pub mod payment;

// Re-export commonly used factory functions for concise usage
pub use attendance::create_attendance;
pub use event::{create_event, create_event_on};
pub use exam::create_exam;
pub use grade::create_grade;
pub use payment::{create_payment, create_payment_with_amount};
