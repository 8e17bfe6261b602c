//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::prelude::StringList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// Each default game gets a creation time one second later than the previous
/// one so that "newest first" ordering is deterministic in tests.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    slug: String,
    title: String,
    description: Option<String>,
    platforms: Vec<String>,
    genres: Vec<String>,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"game-{id}"`
    /// - title: `"Game {id}"`
    /// - platforms: `["pc"]`
    /// - genres: `["action"]`
    /// - tags: `[]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            slug: format!("game-{}", id),
            title: format!("Game {}", id),
            description: None,
            platforms: vec!["pc".to_string()],
            genres: vec!["action".to_string()],
            tags: Vec::new(),
            created_at: Utc::now() + Duration::seconds(id as i64),
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn platforms(mut self, platforms: Vec<&str>) -> Self {
        self.platforms = platforms.into_iter().map(str::to_string).collect();
        self
    }

    pub fn genres(mut self, genres: Vec<&str>) -> Self {
        self.genres = genres.into_iter().map(str::to_string).collect();
        self
    }

    pub fn tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(str::to_string).collect();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the game entity into the database.
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            cover_url: ActiveValue::Set(None),
            platforms: ActiveValue::Set(StringList(self.platforms)),
            genres: ActiveValue::Set(StringList(self.genres)),
            tags: ActiveValue::Set(StringList(self.tags)),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
