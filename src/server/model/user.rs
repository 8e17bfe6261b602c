//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// A user authenticated through Discord, keyed by their Discord ID.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Converts to a DTO, attaching the profile username when one exists.
    pub fn into_dto(self, username: Option<String>) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            avatar: self.avatar,
            username,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            name: entity.name,
            avatar: entity.avatar,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }
}

/// Parameters for upserting a user after an OAuth login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub name: String,
    pub avatar: Option<String>,
}
