use crate::{
    client::{
        api::helper::{fetch_json, get},
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// The logged-in user, or `None` when there is no session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    fetch_json(get("/api/auth/user")).await
}
