//! Campusboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the campusboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting record rows with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Event;
//!
//! #[tokio::test]
//! async fn test_event_listing() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Event)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```
//!
//! Leaving a table out of the builder is the supported way to make queries against that
//! entity fail, which is how store outages are simulated in route tests.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
