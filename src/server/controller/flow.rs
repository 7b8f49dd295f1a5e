use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::flow::{FlowDto, FlowListDto},
    server::state::AppState,
};

/// Tag for grouping flow endpoints in OpenAPI documentation
pub static FLOW_TAG: &str = "flow";

/// List the flows registered at startup, sorted by name.
#[utoipa::path(
    get,
    path = "/api/flows",
    tag = FLOW_TAG,
    responses(
        (status = 200, description = "Registered flows", body = FlowListDto)
    ),
)]
pub async fn get_flows(State(state): State<AppState>) -> impl IntoResponse {
    let flows = state
        .flows
        .iter()
        .map(|flow| FlowDto {
            name: flow.name().to_string(),
            description: flow.description().to_string(),
        })
        .collect();

    (StatusCode::OK, Json(FlowListDto { flows }))
}
