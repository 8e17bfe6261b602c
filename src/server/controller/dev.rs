use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::seed::{SeedEventsReportDto, SeedReportDto},
    server::{service::seed::SeedService, state::AppState},
};

/// Tag for grouping development endpoints in OpenAPI documentation
pub static DEV_TAG: &str = "dev";

/// Inserts the demo game catalog and communities.
///
/// Existing rows are skipped. Any per-row failure is listed in `errors` and
/// turns the status into 500; the report body is the same either way.
#[utoipa::path(
    post,
    path = "/api/dev/seed",
    tag = DEV_TAG,
    responses(
        (status = 200, description = "Seeded without errors", body = SeedReportDto),
        (status = 500, description = "Seeded with errors", body = SeedReportDto)
    ),
)]
pub async fn seed(State(state): State<AppState>) -> impl IntoResponse {
    let report = SeedService::new(&state.db).seed_games().await;

    (report_status(&report.errors), Json(report.into_dto()))
}

/// Inserts demo game versions and their `game_update` events.
#[utoipa::path(
    post,
    path = "/api/dev/seed-events",
    tag = DEV_TAG,
    responses(
        (status = 200, description = "Seeded without errors", body = SeedEventsReportDto),
        (status = 500, description = "Seeded with errors", body = SeedEventsReportDto)
    ),
)]
pub async fn seed_events(State(state): State<AppState>) -> impl IntoResponse {
    let report = SeedService::new(&state.db).seed_events().await;

    (report_status(&report.errors), Json(report.into_dto()))
}

fn report_status(errors: &[String]) -> StatusCode {
    if errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
