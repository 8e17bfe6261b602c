use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        game::{GameDetailDto, GameDto, SetGameStatusDto, UserGameDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::game::{GameFilter, DEFAULT_LIST_LIMIT},
        service::game::GameService,
        state::AppState,
        util::parse::parse_query_u64,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Raw listing query. Numbers stay strings so malformed values produce a 400
/// with an error body instead of the extractor's plain-text rejection.
#[derive(Deserialize, Default)]
pub struct ListGamesParams {
    pub q: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Lists games matching every supplied filter, newest first.
///
/// # Returns
/// - `200 OK` - Matching games
/// - `400 Bad Request` - `limit` or `offset` is not a non-negative integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive title search"),
        ("genre" = Option<String>, Query, description = "Exact genre"),
        ("platform" = Option<String>, Query, description = "Exact platform"),
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100, default 24"),
        ("offset" = Option<u64>, Query, description = "Rows to skip, default 0")
    ),
    responses(
        (status = 200, description = "Matching games", body = Vec<GameDto>),
        (status = 400, description = "Invalid limit or offset", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(params): Query<ListGamesParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = parse_query_u64("limit", params.limit.as_deref(), DEFAULT_LIST_LIMIT)?;
    let offset = parse_query_u64("offset", params.offset.as_deref(), 0)?;

    let filter = GameFilter::new(params.q, params.genre, params.platform, limit, offset);

    let games = GameService::new(&state.db).list(filter).await?;
    let games: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(games)))
}

/// Returns the game page: the game plus independently loaded sections.
///
/// A section that fails to load is returned as `{"status":"error"}` while the
/// rest of the page still loads.
///
/// # Returns
/// - `200 OK` - Game detail
/// - `404 Not Found` - Unknown slug
/// - `500 Internal Server Error` - The game lookup itself failed
#[utoipa::path(
    get,
    path = "/api/games/{slug}",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    responses(
        (status = 200, description = "Game detail", body = GameDetailDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let detail = GameService::new(&state.db)
        .get_detail(&slug, viewer.as_ref().map(|u| u.discord_id.as_str()))
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Sets the logged-in user's play status and favorite flag for a game.
///
/// # Returns
/// - `200 OK` - Stored status
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown slug
#[utoipa::path(
    put,
    path = "/api/games/{slug}/status",
    tag = GAME_TAG,
    params(
        ("slug" = String, Path, description = "Game slug")
    ),
    request_body = SetGameStatusDto,
    responses(
        (status = 200, description = "Stored status", body = UserGameDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_game_status(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Json(payload): Json<SetGameStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let tracked = GameService::new(&state.db)
        .set_status(&user.discord_id, &slug, payload.status, payload.favorite)
        .await?;

    Ok((StatusCode::OK, Json(tracked.into_dto())))
}
