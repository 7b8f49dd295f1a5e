use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        data::event::EventRepository,
        error::{fetch::FetchError, AppError},
        model::record::RecordKind,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Get every event, earliest first.
///
/// Returns the full event collection sorted ascending by date. This is the only
/// collection route that applies an ordering.
///
/// # Returns
/// - `200 OK` - JSON array of events sorted by date (possibly empty)
/// - `500 Internal Server Error` - `{"error": "Failed to fetch events"}`
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved events, ordered by date"),
        (status = 500, description = "Failed to fetch events", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventRepository::new(&state.db)
        .get_all()
        .await
        .map_err(|e| FetchError::new(RecordKind::Event, e))?;

    Ok((StatusCode::OK, Json(events)))
}
