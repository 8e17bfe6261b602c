//! Player presence repository.

use std::collections::HashSet;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::player::Player};

/// Rows scanned per page while collecting one player per user.
const SUGGESTED_SCAN_PAGE_SIZE: u64 = 100;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Players of a game, most recently active first.
    pub async fn get_by_game(&self, game_id: i32) -> Result<Vec<Player>, AppError> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::GameId.eq(game_id))
            .order_by_desc(entity::player::Column::UpdatedAt)
            .order_by_desc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        let players = entities
            .into_iter()
            .map(Player::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(players)
    }

    /// Most recently updated players with at most one entry per user.
    ///
    /// # Arguments
    /// - `exclude_user_id` - Viewer to leave out of the results
    /// - `limit` - Maximum number of players returned
    pub async fn get_suggested(
        &self,
        exclude_user_id: Option<&str>,
        limit: u64,
    ) -> Result<Vec<Player>, AppError> {
        let mut query = entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::UpdatedAt)
            .order_by_desc(entity::player::Column::Id);

        if let Some(user_id) = exclude_user_id {
            query = query.filter(entity::player::Column::UserId.ne(user_id));
        }

        let mut pages = query.paginate(self.db, SUGGESTED_SCAN_PAGE_SIZE);
        let mut seen = HashSet::new();
        let mut players = Vec::new();

        while let Some(page) = pages.fetch_and_next().await? {
            for entity in page {
                if players.len() as u64 >= limit {
                    return Ok(players);
                }
                if seen.insert(entity.user_id.clone()) {
                    players.push(Player::from_entity(entity)?);
                }
            }
        }

        players.truncate(limit as usize);

        Ok(players)
    }
}
