use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::record::RecordKind};

/// Failure while bulk-fetching a record collection.
///
/// Any error from the store lands here. The cause is kept for the server log only.
#[derive(Error, Debug)]
#[error("Failed to fetch {kind} records: {source}")]
pub struct FetchError {
    /// Collection the handler was serving
    pub kind: RecordKind,
    /// The underlying database error
    #[source]
    pub source: sea_orm::DbErr,
}

impl FetchError {
    pub fn new(kind: RecordKind, source: sea_orm::DbErr) -> Self {
        Self { kind, source }
    }
}

/// Converts a fetch failure into a 500 with the fixed message for its record kind.
///
/// The underlying error is logged at error level and never included in the response
/// body.
impl IntoResponse for FetchError {
    fn into_response(self) -> Response {
        tracing::error!(
            kind = %self.kind,
            route = self.kind.path(),
            error = %self.source,
            "record fetch failed"
        );

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: self.kind.failure_message().to_string(),
            }),
        )
            .into_response()
    }
}
