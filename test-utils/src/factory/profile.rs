//! Profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    username: String,
    display_name: Option<String>,
    bio: Option<String>,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory for the given user.
    ///
    /// Defaults:
    /// - username: `"player{id}"`
    /// - display_name: `Some("Player Name {id}")`
    /// - bio: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user_id.to_string(),
            username: format!("player{}", id),
            display_name: Some(format!("Player Name {}", id)),
            bio: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn display_name(mut self, display_name: Option<&str>) -> Self {
        self.display_name = display_name.map(str::to_string);
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Builds and inserts the profile entity into the database.
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();
        entity::profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            username: ActiveValue::Set(self.username),
            display_name: ActiveValue::Set(self.display_name),
            avatar_url: ActiveValue::Set(None),
            bio: ActiveValue::Set(self.bio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values for the given user.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, user_id).build().await
}
