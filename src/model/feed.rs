use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    StatusChanged,
    GuidePublished,
    CommunityJoined,
    Followed,
    GameUpdate,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::StatusChanged,
        EventKind::GuidePublished,
        EventKind::CommunityJoined,
        EventKind::Followed,
        EventKind::GameUpdate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::StatusChanged => "status_changed",
            EventKind::GuidePublished => "guide_published",
            EventKind::CommunityJoined => "community_joined",
            EventKind::Followed => "followed",
            EventKind::GameUpdate => "game_update",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventAuthorDto {
    pub user_id: String,
    pub username: Option<String>,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventGameDto {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub kind: EventKind,
    pub title: String,
    pub description: Option<String>,
    pub author: Option<EventAuthorDto>,
    pub game: Option<EventGameDto>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeedDto {
    pub username: String,
    pub following_count: u64,
    pub events: Vec<EventDto>,
}
