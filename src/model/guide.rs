use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GuideDto {
    pub id: i32,
    pub game_id: i32,
    pub title: String,
    /// Markdown body.
    pub content: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Steps for playing a game together across two platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlayGuideDto {
    pub id: i32,
    pub game_id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub from_platform: String,
    pub to_platform: String,
    pub steps: Vec<String>,
}
