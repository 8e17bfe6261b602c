use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, player::PlayerDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Recently active players, one per user, excluding the viewer when logged in.
#[utoipa::path(
    get,
    path = "/api/players/suggested",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Up to 20 suggested players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suggested_players(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).optional().await?;

    let players = PlayerService::new(&state.db)
        .get_suggested(viewer.as_ref().map(|u| u.discord_id.as_str()))
        .await?;
    let players: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(players)))
}
