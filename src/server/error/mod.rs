//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod fetch;
pub mod flow;
pub mod internal;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{
    config::ConfigError, fetch::FetchError, flow::FlowError, internal::InternalServerError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Fetch failures map their own response, every
/// other variant becomes a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM outside of a record fetch, such as
    /// connecting or running migrations at startup.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A record collection could not be fetched.
    ///
    /// Delegates to `FetchError::into_response()` which returns the fixed message for
    /// the record kind.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// Flow registration or execution error.
    #[error(transparent)]
    FlowErr(#[from] FlowError),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 500 Internal Server Error with the record kind's fixed message - For `FetchErr`
/// - 500 Internal Server Error with a generic message - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::FetchErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
