//! API routes and OpenAPI documentation.
//!
//! Every route is registered through `utoipa_axum::routes!` so the OpenAPI
//! document is generated from the handler annotations. Swagger UI is served at
//! `/api/docs`.

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware::map_response,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            community::{self, COMMUNITY_TAG},
            dev::{self, DEV_TAG},
            feed::{self, FEED_TAG},
            game::{self, GAME_TAG},
            player::{self, PLAYER_TAG},
            profile::{self, PROFILE_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "GameHub API"),
    tags(
        (name = AUTH_TAG, description = "Discord login and session"),
        (name = GAME_TAG, description = "Game catalog and play status"),
        (name = COMMUNITY_TAG, description = "Community membership"),
        (name = PLAYER_TAG, description = "Player directory"),
        (name = FEED_TAG, description = "Activity feed"),
        (name = PROFILE_TAG, description = "Profiles and follows"),
        (name = DEV_TAG, description = "Development seeding")
    )
)]
struct ApiDoc;

/// Builds the API router.
///
/// # Arguments
/// - `enable_dev_routes` - Mounts `/api/dev/*` when true; otherwise those paths 404
/// - `request_timeout` - Deadline applied to every API request; expiry answers
///   408 with a `{"error"}` body
pub fn router(enable_dev_routes: bool, request_timeout: Duration) -> Router<AppState> {
    let mut api = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(game::list_games))
        .routes(routes!(game::get_game))
        .routes(routes!(game::set_game_status))
        .routes(routes!(community::join_community))
        .routes(routes!(player::get_suggested_players))
        .routes(routes!(feed::get_feed))
        .routes(routes!(
            profile::get_own_profile,
            profile::update_profile
        ))
        .routes(routes!(profile::get_profile))
        .routes(routes!(
            profile::follow_profile,
            profile::unfollow_profile
        ));

    if enable_dev_routes {
        api = api
            .routes(routes!(dev::seed))
            .routes(routes!(dev::seed_events));
    }

    let (router, openapi) = api.split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(map_response(timeout_error_body))
}

/// Replaces the empty body of a timed-out request with the usual error JSON.
async fn timeout_error_body(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ErrorDto {
            error: "Request timed out".to_string(),
        }),
    )
        .into_response()
}
