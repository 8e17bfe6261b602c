use crate::{
    client::{
        api::helper::{fetch_json, get},
        model::error::ApiError,
    },
    model::feed::FeedDto,
};

pub async fn get_feed() -> Result<FeedDto, ApiError> {
    fetch_json(get("/api/feed")).await
}
