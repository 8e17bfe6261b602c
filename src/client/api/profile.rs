use crate::{
    client::{
        api::helper::{delete, encode, fetch_empty, fetch_json, get, post, put_json},
        model::error::ApiError,
    },
    model::profile::{ProfileDto, UpdateProfileDto},
};

pub async fn get_own_profile() -> Result<ProfileDto, ApiError> {
    fetch_json(get("/api/profile")).await
}

pub async fn update_profile(payload: &UpdateProfileDto) -> Result<ProfileDto, ApiError> {
    fetch_json(put_json("/api/profile", payload)?).await
}

pub async fn get_profile(username: &str) -> Result<ProfileDto, ApiError> {
    let url = format!("/api/profile/{}", encode(username));
    fetch_json(get(&url)).await
}

pub async fn follow(username: &str) -> Result<(), ApiError> {
    let url = format!("/api/profile/{}/follow", encode(username));
    fetch_empty(post(&url)).await
}

pub async fn unfollow(username: &str) -> Result<(), ApiError> {
    let url = format!("/api/profile/{}/follow", encode(username));
    fetch_empty(delete(&url)).await
}
