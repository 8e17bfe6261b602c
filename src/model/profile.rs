use serde::{Deserialize, Serialize};

use crate::model::{
    community::CommunityDto,
    feed::EventDto,
    game::{GameDto, PlayStatus},
    guide::GuideDto,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsDto {
    pub games: u64,
    pub communities: u64,
    pub guides: u64,
    pub followers: u64,
    pub following: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TrackedGameDto {
    pub game: GameDto,
    pub status: PlayStatus,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i32,
    pub user_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub stats: ProfileStatsDto,
    pub favorite_games: Vec<GameDto>,
    pub games: Vec<TrackedGameDto>,
    pub communities: Vec<CommunityDto>,
    pub guides: Vec<GuideDto>,
    pub events: Vec<EventDto>,
    pub is_following: bool,
    pub is_self: bool,
}

/// Editable profile fields. Username is not editable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
