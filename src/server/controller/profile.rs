use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Returns the logged-in user's own profile, creating it on first access.
///
/// # Returns
/// - `200 OK` - Own profile
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Profile creation or lookup failed
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Own profile", body = ProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let view = ProfileService::new(&state.db).get_own(&user).await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Updates display name, bio and avatar URL. Blank values clear the field.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Display name over 50 or bio over 500 characters
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let view = ProfileService::new(&state.db).update(&user, payload).await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Returns a public profile page.
#[utoipa::path(
    get,
    path = "/api/profile/{username}",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Profile username")
    ),
    responses(
        (status = 200, description = "Profile", body = ProfileDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let view = ProfileService::new(&state.db)
        .get_by_username(&username, viewer.as_ref().map(|u| u.discord_id.as_str()))
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Follows a profile. Following again is a no-op.
#[utoipa::path(
    post,
    path = "/api/profile/{username}/follow",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Profile username")
    ),
    responses(
        (status = 204, description = "Following"),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow_profile(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    ProfileService::new(&state.db)
        .follow(&user, &username)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unfollows a profile. Not following is not an error.
#[utoipa::path(
    delete,
    path = "/api/profile/{username}/follow",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Profile username")
    ),
    responses(
        (status = 204, description = "Not following"),
        (status = 400, description = "Cannot unfollow yourself", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfollow_profile(
    State(state): State<AppState>,
    session: Session,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    ProfileService::new(&state.db)
        .unfollow(&user, &username)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
