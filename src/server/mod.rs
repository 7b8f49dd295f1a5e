//! Server-side API backend.
//!
//! This module contains the complete backend implementation: API endpoints, data access,
//! error mapping and process startup. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and error mapping
//! - **Data Layer** (`data/`) - One read-only repository per record kind
//! - **Model Layer** (`model/`) - Record kinds and their per-route configuration
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Flow Registry** (`flow/`) - Named AI flows registered at startup
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, flow registry)
//! - **Startup** (`startup`) - Database connection, migrations, flow registration, CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the GET request and routes it to its controller
//! 2. **Controller** asks the record kind's repository for the full collection
//! 3. **Data** runs a single query, ordered only for events
//! 4. **Controller** returns the rows as JSON, or the kind's fixed error message with 500

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod flow;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;
