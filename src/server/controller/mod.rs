//! HTTP request handlers.
//!
//! One module per route group. The record controllers each fetch a single collection
//! and map store failures to the fixed message for their record kind.

pub mod attendance;
pub mod event;
pub mod exam;
pub mod finance;
pub mod flow;
pub mod grade;
pub mod health;

#[cfg(test)]
mod test;
