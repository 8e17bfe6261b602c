use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
    /// Username of the user's profile, once the profile has been created.
    pub username: Option<String>,
}
