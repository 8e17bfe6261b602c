use crate::{
    client::{
        api::helper::{fetch_json, get},
        model::error::ApiError,
    },
    model::player::PlayerDto,
};

pub async fn get_suggested_players() -> Result<Vec<PlayerDto>, ApiError> {
    fetch_json(get("/api/players/suggested")).await
}
