use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::guide::{Guide, PlayGuide};

pub struct GuideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuideRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Guides for a game, newest first.
    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<Guide>, DbErr> {
        let entities = entity::prelude::Guide::find()
            .filter(entity::guide::Column::GameId.eq(game_id))
            .order_by_desc(entity::guide::Column::CreatedAt)
            .order_by_desc(entity::guide::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guide::from_entity).collect())
    }

    /// Guides written by a user, newest first.
    pub async fn get_by_author(&self, user_id: &str) -> Result<Vec<Guide>, DbErr> {
        let entities = entity::prelude::Guide::find()
            .filter(entity::guide::Column::CreatedBy.eq(user_id))
            .order_by_desc(entity::guide::Column::CreatedAt)
            .order_by_desc(entity::guide::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Guide::from_entity).collect())
    }

    pub async fn count_by_author(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Guide::find()
            .filter(entity::guide::Column::CreatedBy.eq(user_id))
            .count(self.db)
            .await
    }
}

pub struct PlayGuideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayGuideRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<PlayGuide>, DbErr> {
        let entities = entity::prelude::PlayGuide::find()
            .filter(entity::play_guide::Column::GameId.eq(game_id))
            .order_by_asc(entity::play_guide::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PlayGuide::from_entity).collect())
    }
}
