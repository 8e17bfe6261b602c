use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::community::CommunityService,
        state::AppState,
    },
};

/// Tag for grouping community endpoints in OpenAPI documentation
pub static COMMUNITY_TAG: &str = "community";

/// Joins a community. Joining again is a no-op.
#[utoipa::path(
    post,
    path = "/api/communities/{id}/join",
    tag = COMMUNITY_TAG,
    params(
        ("id" = i32, Path, description = "Community ID")
    ),
    responses(
        (status = 204, description = "Joined"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Community not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_community(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    CommunityService::new(&state.db)
        .join(&user.discord_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
