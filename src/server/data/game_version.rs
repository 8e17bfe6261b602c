use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::game::GameVersion;

pub struct GameVersionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameVersionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Latest versions of a game, newest release first.
    pub async fn get_latest_by_game(
        &self,
        game_id: i32,
        limit: u64,
    ) -> Result<Vec<GameVersion>, DbErr> {
        let entities = entity::prelude::GameVersion::find()
            .filter(entity::game_version::Column::GameId.eq(game_id))
            .order_by_desc(entity::game_version::Column::ReleasedAt)
            .order_by_desc(entity::game_version::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameVersion::from_entity).collect())
    }

    pub async fn exists(&self, game_id: i32, version: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::GameVersion::find()
            .filter(entity::game_version::Column::GameId.eq(game_id))
            .filter(entity::game_version::Column::Version.eq(version))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(
        &self,
        game_id: i32,
        version: String,
        notes: Option<String>,
    ) -> Result<GameVersion, DbErr> {
        let entity = entity::game_version::ActiveModel {
            game_id: ActiveValue::Set(game_id),
            version: ActiveValue::Set(version),
            notes: ActiveValue::Set(notes),
            released_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameVersion::from_entity(entity))
    }
}
