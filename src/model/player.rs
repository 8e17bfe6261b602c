use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of identity characters kept in a placeholder display name.
const PLACEHOLDER_ID_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Online,
    Looking,
    Offline,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 3] = [
        PlayerStatus::Online,
        PlayerStatus::Looking,
        PlayerStatus::Offline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Online => "online",
            PlayerStatus::Looking => "looking",
            PlayerStatus::Offline => "offline",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Online => "Online",
            PlayerStatus::Looking => "Looking for group",
            PlayerStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub user_id: String,
    pub game_id: i32,
    pub game_slug: Option<String>,
    pub game_title: Option<String>,
    pub platform: String,
    pub status: PlayerStatus,
    /// Username of the player's profile, when one exists.
    pub username: Option<String>,
    /// Always populated; see [`resolve_display_name`].
    pub display_name: String,
    pub updated_at: DateTime<Utc>,
}

/// Name shown for an identity without a profile name: `"Player "` followed by
/// the first eight characters of the identity.
pub fn placeholder_name(user_id: &str) -> String {
    let prefix: String = user_id.chars().take(PLACEHOLDER_ID_LEN).collect();
    format!("Player {}", prefix)
}

/// Picks the display name, then the username, then the identity placeholder.
pub fn resolve_display_name(
    display_name: Option<&str>,
    username: Option<&str>,
    user_id: &str,
) -> String {
    display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| username.map(str::trim).filter(|name| !name.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| placeholder_name(user_id))
}
