//! Guide factory for creating test guide entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guides attached to a game.
pub struct GuideFactory<'a> {
    db: &'a DatabaseConnection,
    game_id: i32,
    title: String,
    content: String,
    created_by: Option<String>,
}

impl<'a> GuideFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, game_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            game_id,
            title: format!("Guide {}", id),
            content: "# Getting started\n\nPress start.".to_string(),
            created_by: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created_by(mut self, user_id: impl Into<String>) -> Self {
        self.created_by = Some(user_id.into());
        self
    }

    /// Builds and inserts the guide entity into the database.
    pub async fn build(self) -> Result<entity::guide::Model, DbErr> {
        entity::guide::ActiveModel {
            game_id: ActiveValue::Set(self.game_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guide with default values for the given game.
pub async fn create_guide(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::guide::Model, DbErr> {
    GuideFactory::new(db, game_id).build().await
}
