//! Player factory for creating per-game presence rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    game_id: i32,
    platform: String,
    status: String,
    updated_at: DateTime<Utc>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory.
    ///
    /// Defaults:
    /// - platform: `"pc"`
    /// - status: `"online"`
    /// - updated_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: &str, game_id: i32) -> Self {
        Self {
            db,
            user_id: user_id.to_string(),
            game_id,
            platform: "pc".to_string(),
            status: "online".to_string(),
            updated_at: Utc::now(),
        }
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Sets the raw status column, including values outside the allowed set.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            platform: ActiveValue::Set(self.platform),
            status: ActiveValue::Set(self.status),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an online PC player for the given user and game.
pub async fn create_player(
    db: &DatabaseConnection,
    user_id: &str,
    game_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, user_id, game_id).build().await
}
