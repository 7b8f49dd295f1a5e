//! Campusboard: read-only JSON API over a school's attendance, events, exams, payments
//! and grades, plus the registry of AI flows available to the rest of the platform.

pub mod model;
pub mod server;
