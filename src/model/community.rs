use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CommunityDto {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub invite_url: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub online_count: u32,
}
