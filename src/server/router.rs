use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{attendance, event, exam, finance, flow, grade, health},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Campusboard API",
    description = "Read-only access to attendance, events, exams, payments and grades"
))]
pub struct ApiDoc;

/// Builds every API route plus the generated OpenAPI document and Swagger UI.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(attendance::get_attendance))
        .routes(routes!(event::get_events))
        .routes(routes!(exam::get_exams))
        .routes(routes!(finance::get_payments))
        .routes(routes!(grade::get_grades))
        .routes(routes!(health::get_health))
        .routes(routes!(flow::get_flows))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
