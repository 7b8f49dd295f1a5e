//! Wire DTOs shared by the API controllers.

pub mod api;
pub mod flow;
pub mod health;
