//! Community factory for creating test community entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test communities attached to a game.
pub struct CommunityFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    name: String,
    invite_url: String,
    category: Option<String>,
    language: Option<String>,
    online_count: i32,
}

impl<'a> CommunityFactory<'a> {
    /// Creates a new CommunityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Community {id}"`
    /// - invite_url: `"https://discord.gg/test{id}"`
    /// - online_count: `0`
    pub fn new(db: &'a DatabaseConnection, game_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            game_id,
            name: format!("Community {}", id),
            invite_url: format!("https://discord.gg/test{}", id),
            category: None,
            language: None,
            online_count: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn online_count(mut self, online_count: i32) -> Self {
        self.online_count = online_count;
        self
    }

    /// Builds and inserts the community entity into the database.
    pub async fn build(self) -> Result<entity::community::Model, DbErr> {
        entity::community::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            name: ActiveValue::Set(self.name),
            invite_url: ActiveValue::Set(self.invite_url),
            category: ActiveValue::Set(self.category),
            language: ActiveValue::Set(self.language),
            online_count: ActiveValue::Set(self.online_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a community with default values for the given game.
pub async fn create_community(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::community::Model, DbErr> {
    CommunityFactory::new(db, game_id).build().await
}
