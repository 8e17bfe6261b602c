use crate::{
    client::{
        api::helper::{encode, fetch_json, get, put_json},
        model::error::ApiError,
    },
    model::game::{GameDetailDto, GameDto, SetGameStatusDto, UserGameDto},
};

/// Filters for the game listing. Blank values are left out of the query.
#[derive(Clone, Default, PartialEq)]
pub struct GameQuery {
    pub q: String,
    pub genre: String,
    pub platform: String,
}

impl GameQuery {
    fn to_query_string(&self) -> String {
        [("q", &self.q), ("genre", &self.genre), ("platform", &self.platform)]
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| format!("{}={}", key, encode(value.trim())))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub async fn get_games(query: GameQuery) -> Result<Vec<GameDto>, ApiError> {
    let query = query.to_query_string();
    let url = if query.is_empty() {
        "/api/games".to_string()
    } else {
        format!("/api/games?{}", query)
    };

    fetch_json(get(&url)).await
}

pub async fn get_game(slug: &str) -> Result<GameDetailDto, ApiError> {
    let url = format!("/api/games/{}", encode(slug));
    fetch_json(get(&url)).await
}

pub async fn set_game_status(
    slug: &str,
    payload: &SetGameStatusDto,
) -> Result<UserGameDto, ApiError> {
    let url = format!("/api/games/{}/status", encode(slug));
    fetch_json(put_json(&url, payload)?).await
}
