//! Database repository layer for the record collections.
//!
//! This module contains one repository struct per record kind. Repositories use SeaORM
//! entity models directly, since the collection routes return rows exactly as stored.
//! All database queries are performed through these repositories.

pub mod attendance;
pub mod event;
pub mod exam;
pub mod grade;
pub mod payment;

#[cfg(test)]
mod test;
