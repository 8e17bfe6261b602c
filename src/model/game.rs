use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    api::SectionDto,
    community::CommunityDto,
    guide::{GuideDto, PlayGuideDto},
    player::PlayerDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameVersionDto {
    pub id: i32,
    pub version: String,
    pub notes: Option<String>,
    pub released_at: DateTime<Utc>,
}

/// Everything the game detail page shows, each related slice loaded independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameDetailDto {
    pub game: GameDto,
    pub communities: SectionDto<Vec<CommunityDto>>,
    pub guides: SectionDto<Vec<GuideDto>>,
    pub play_guides: SectionDto<Vec<PlayGuideDto>>,
    pub players: SectionDto<Vec<PlayerDto>>,
    pub similar_games: SectionDto<Vec<GameDto>>,
    pub versions: SectionDto<Vec<GameVersionDto>>,
    /// The logged-in viewer's tracking entry for this game. `Ok` with no data
    /// when the viewer is anonymous or does not track the game.
    pub viewer_status: SectionDto<Option<UserGameDto>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlayStatus {
    Playing,
    Completed,
    Backlog,
    Wishlist,
}

impl PlayStatus {
    pub const ALL: [PlayStatus; 4] = [
        PlayStatus::Playing,
        PlayStatus::Completed,
        PlayStatus::Backlog,
        PlayStatus::Wishlist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayStatus::Playing => "playing",
            PlayStatus::Completed => "completed",
            PlayStatus::Backlog => "backlog",
            PlayStatus::Wishlist => "wishlist",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayStatus::Playing => "Playing",
            PlayStatus::Completed => "Completed",
            PlayStatus::Backlog => "Backlog",
            PlayStatus::Wishlist => "Wishlist",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserGameDto {
    pub game_id: i32,
    pub status: PlayStatus,
    pub favorite: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SetGameStatusDto {
    pub status: PlayStatus,
    #[serde(default)]
    pub favorite: bool,
}
