use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::community::Community};

pub struct CommunityRepository<'a> {
    db: &'a DatabaseConnection,
}

#[derive(Debug, Clone)]
pub struct CreateCommunityParam {
    pub game_id: i32,
    pub name: String,
    pub invite_url: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub online_count: u32,
}

impl<'a> CommunityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Communities for a game, most populated first.
    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<Community>, AppError> {
        let entities = entity::prelude::Community::find()
            .filter(entity::community::Column::GameId.eq(game_id))
            .order_by_desc(entity::community::Column::OnlineCount)
            .order_by_asc(entity::community::Column::Id)
            .all(self.db)
            .await?;

        let communities = entities
            .into_iter()
            .map(Community::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(communities)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Community>, AppError> {
        let entity = entity::prelude::Community::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Community::from_entity).transpose()?)
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Community>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Community::find()
            .filter(entity::community::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::community::Column::Name)
            .all(self.db)
            .await?;

        let communities = entities
            .into_iter()
            .map(Community::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(communities)
    }

    pub async fn exists_by_name(&self, game_id: i32, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Community::find()
            .filter(entity::community::Column::GameId.eq(game_id))
            .filter(entity::community::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(&self, param: CreateCommunityParam) -> Result<Community, AppError> {
        let entity = entity::community::ActiveModel {
            game_id: ActiveValue::Set(param.game_id),
            name: ActiveValue::Set(param.name),
            invite_url: ActiveValue::Set(param.invite_url),
            category: ActiveValue::Set(param.category),
            language: ActiveValue::Set(param.language),
            online_count: ActiveValue::Set(i32::try_from(param.online_count).unwrap_or(i32::MAX)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Community::from_entity(entity)?)
    }
}
