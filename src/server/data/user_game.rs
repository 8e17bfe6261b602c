use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::game::{SetGameStatusParam, UserGame},
};

pub struct UserGameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserGameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or replaces the tracking entry for a user and game.
    pub async fn upsert(&self, param: SetGameStatusParam) -> Result<UserGame, AppError> {
        let entity = entity::prelude::UserGame::insert(entity::user_game::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            game_id: ActiveValue::Set(param.game_id),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            favorite: ActiveValue::Set(param.favorite),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_game::Column::UserId,
                entity::user_game::Column::GameId,
            ])
            .update_columns([
                entity::user_game::Column::Status,
                entity::user_game::Column::Favorite,
                entity::user_game::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(UserGame::from_entity(entity)?)
    }

    pub async fn find(&self, user_id: &str, game_id: i32) -> Result<Option<UserGame>, AppError> {
        let entity = entity::prelude::UserGame::find_by_id((user_id.to_string(), game_id))
            .one(self.db)
            .await?;

        Ok(entity.map(UserGame::from_entity).transpose()?)
    }

    /// All games tracked by a user, most recently updated first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<UserGame>, AppError> {
        let entities = entity::prelude::UserGame::find()
            .filter(entity::user_game::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_game::Column::UpdatedAt)
            .all(self.db)
            .await?;

        let tracked = entities
            .into_iter()
            .map(UserGame::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tracked)
    }

    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::UserGame::find()
            .filter(entity::user_game::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
