use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        data::grade::GradeRepository,
        error::{fetch::FetchError, AppError},
        model::record::RecordKind,
        state::AppState,
    },
};

/// Tag for grouping grade endpoints in OpenAPI documentation
pub static GRADE_TAG: &str = "grade";

#[utoipa::path(
    get,
    path = "/api/grades",
    tag = GRADE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved grades"),
        (status = 500, description = "Failed to fetch grades", body = ErrorDto)
    ),
)]
pub async fn get_grades(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let grades = GradeRepository::new(&state.db)
        .get_all()
        .await
        .map_err(|e| FetchError::new(RecordKind::Grade, e))?;

    Ok((StatusCode::OK, Json(grades)))
}
