//! Player presence models.

use chrono::{DateTime, Utc};

use crate::{
    model::player::{resolve_display_name, PlayerDto, PlayerStatus},
    server::{error::internal::InternalError, model::profile::Profile},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub user_id: String,
    pub game_id: i32,
    pub platform: String,
    pub status: PlayerStatus,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Parses the stored status strictly; unknown values are an error.
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, InternalError> {
        let status =
            PlayerStatus::parse(&entity.status).ok_or_else(|| InternalError::InvalidEnumValue {
                table: "player",
                column: "status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            platform: entity.platform,
            status,
            updated_at: entity.updated_at,
        })
    }
}

/// A player joined with the identity and game it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWithIdentity {
    pub player: Player,
    pub username: Option<String>,
    pub display_name: String,
    pub game_slug: Option<String>,
    pub game_title: Option<String>,
}

impl PlayerWithIdentity {
    pub fn new(player: Player, profile: Option<&Profile>, game: Option<(&str, &str)>) -> Self {
        let display_name = resolve_display_name(
            profile.and_then(|p| p.display_name.as_deref()),
            profile.map(|p| p.username.as_str()),
            &player.user_id,
        );

        Self {
            username: profile.map(|p| p.username.clone()),
            display_name,
            game_slug: game.map(|(slug, _)| slug.to_string()),
            game_title: game.map(|(_, title)| title.to_string()),
            player,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.player.id,
            user_id: self.player.user_id,
            game_id: self.player.game_id,
            game_slug: self.game_slug,
            game_title: self.game_title,
            platform: self.player.platform,
            status: self.player.status,
            username: self.username,
            display_name: self.display_name,
            updated_at: self.player.updated_at,
        }
    }
}
