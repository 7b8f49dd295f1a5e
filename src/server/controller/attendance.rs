use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        data::attendance::AttendanceRepository,
        error::{fetch::FetchError, AppError},
        model::record::RecordKind,
        state::AppState,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

/// Get every attendance record.
///
/// Returns the full attendance collection exactly as stored, in store order.
///
/// # Returns
/// - `200 OK` - JSON array of attendance records (possibly empty)
/// - `500 Internal Server Error` - `{"error": "Failed to fetch attendance"}`
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved attendance records"),
        (status = 500, description = "Failed to fetch attendance", body = ErrorDto)
    ),
)]
pub async fn get_attendance(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = AttendanceRepository::new(&state.db)
        .get_all()
        .await
        .map_err(|e| FetchError::new(RecordKind::Attendance, e))?;

    Ok((StatusCode::OK, Json(records)))
}
