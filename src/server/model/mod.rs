//! Server-side domain models.
//!
//! Record rows are served as their entity models, so the only domain type here is the
//! record kind that parameterizes each collection route.

pub mod record;
