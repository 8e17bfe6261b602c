use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, feed::FeedDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::feed::FeedService,
        state::AppState,
    },
};

/// Tag for grouping feed endpoints in OpenAPI documentation
pub static FEED_TAG: &str = "feed";

/// Activity feed of the users the logged-in user follows.
///
/// The user's profile is created on first access. A failure here is always an
/// error response, never an empty feed.
///
/// # Returns
/// - `200 OK` - Up to 20 newest events
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Profile creation or feed query failed
#[utoipa::path(
    get,
    path = "/api/feed",
    tag = FEED_TAG,
    responses(
        (status = 200, description = "Activity feed", body = FeedDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feed(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let feed = FeedService::new(&state.db).get_feed(&user).await?;

    Ok((StatusCode::OK, Json(feed.into_dto())))
}
