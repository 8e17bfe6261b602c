use crate::client::{
    api::helper::{fetch_empty, post},
    model::error::ApiError,
};

pub async fn join_community(community_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/communities/{}/join", community_id);
    fetch_empty(post(&url)).await
}
