//! Event factory for creating activity feed entries.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<String>,
    game_id: Option<i32>,
    kind: String,
    title: String,
    created_at: DateTime<Utc>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory.
    ///
    /// Defaults:
    /// - kind: `"status_changed"`
    /// - title: `"Started playing"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: None,
            game_id: None,
            kind: "status_changed".to_string(),
            title: "Started playing".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn game_id(mut self, game_id: i32) -> Self {
        self.game_id = Some(game_id);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event authored by the given user.
pub async fn create_event(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).user_id(user_id).build().await
}
