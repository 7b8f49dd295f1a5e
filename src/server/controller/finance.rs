use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{
        data::payment::PaymentRepository,
        error::{fetch::FetchError, AppError},
        model::record::RecordKind,
        state::AppState,
    },
};

/// Tag for grouping finance endpoints in OpenAPI documentation
pub static FINANCE_TAG: &str = "finance";

/// Get every fee payment.
///
/// Returns the full payment collection exactly as stored. Amounts are not summed,
/// rounded or formatted.
///
/// # Returns
/// - `200 OK` - JSON array of payments (possibly empty)
/// - `500 Internal Server Error` - `{"error": "Failed to fetch payments"}`
#[utoipa::path(
    get,
    path = "/api/finance/payments",
    tag = FINANCE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved payments"),
        (status = 500, description = "Failed to fetch payments", body = ErrorDto)
    ),
)]
pub async fn get_payments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let payments = PaymentRepository::new(&state.db)
        .get_all()
        .await
        .map_err(|e| FetchError::new(RecordKind::Payment, e))?;

    Ok((StatusCode::OK, Json(payments)))
}
