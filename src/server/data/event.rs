use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::event::{CreateEventParam, Event},
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let entity = entity::event::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            game_id: ActiveValue::Set(param.game_id),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity)?)
    }

    /// Newest events authored by any of `user_ids`, capped at `limit`.
    pub async fn get_recent_by_users(
        &self,
        user_ids: &[String],
        limit: u64,
    ) -> Result<Vec<Event>, AppError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::UserId.is_in(user_ids.iter().cloned()))
            .order_by_desc(entity::event::Column::CreatedAt)
            .order_by_desc(entity::event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        let events = entities
            .into_iter()
            .map(Event::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(events)
    }

    /// Whether an event with this title already exists for the game.
    pub async fn exists_for_game(&self, game_id: i32, title: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::GameId.eq(game_id))
            .filter(entity::event::Column::Title.eq(title))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
