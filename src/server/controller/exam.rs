use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        data::exam::ExamRepository,
        error::{fetch::FetchError, AppError},
        model::record::RecordKind,
        state::AppState,
    },
};

/// Tag for grouping exam endpoints in OpenAPI documentation
pub static EXAM_TAG: &str = "exam";

/// Get every scheduled exam in store order.
#[utoipa::path(
    get,
    path = "/api/exams",
    tag = EXAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved exams"),
        (status = 500, description = "Failed to fetch exams", body = ErrorDto)
    ),
)]
pub async fn get_exams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let exams = ExamRepository::new(&state.db)
        .get_all()
        .await
        .map_err(|e| FetchError::new(RecordKind::Exam, e))?;

    Ok((StatusCode::OK, Json(exams)))
}
