//! Game repository: listing with filters, lookups and similar-game queries.

use chrono::Utc;
use entity::prelude::StringList;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::game::{Game, GameFilter};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

/// Fields for inserting a game.
#[derive(Debug, Clone)]
pub struct CreateGameParam {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists games matching every supplied filter, newest first.
    ///
    /// Ties on `created_at` are broken by descending id so paging is stable.
    pub async fn list(&self, filter: &GameFilter) -> Result<Vec<Game>, DbErr> {
        let mut condition = Condition::all();

        if let Some(query) = &filter.query {
            let pattern = format!("%{}%", escape_like(query));
            condition = condition
                .add(entity::game::Column::Title.like(LikeExpr::new(pattern).escape('\\')));
        }
        if let Some(genre) = &filter.genre {
            condition = condition.add(has_element("genres", genre));
        }
        if let Some(platform) = &filter.platform {
            condition = condition.add(has_element("platforms", platform));
        }

        let entities = entity::prelude::Game::find()
            .filter(condition)
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find()
            .filter(entity::game::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Game>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Games sharing at least one genre with `game`, excluding `game` itself,
    /// newest first and capped at `limit`.
    pub async fn find_similar(&self, game: &Game, limit: u64) -> Result<Vec<Game>, DbErr> {
        if game.genres.is_empty() {
            return Ok(Vec::new());
        }

        let shared_genre = game
            .genres
            .iter()
            .fold(Condition::any(), |cond, genre| cond.add(has_element("genres", genre)));

        let entities = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.ne(game.id))
            .filter(shared_genre)
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    pub async fn create(&self, param: CreateGameParam) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            cover_url: ActiveValue::Set(param.cover_url),
            platforms: ActiveValue::Set(StringList::from(param.platforms)),
            genres: ActiveValue::Set(StringList::from(param.genres)),
            tags: ActiveValue::Set(StringList::from(param.tags)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }
}

/// Matches games whose JSON list `column` holds `value` as a whole element.
///
/// Comparison is exact and case-sensitive.
fn has_element(column: &str, value: &str) -> Condition {
    Condition::all().add(Expr::cust_with_values(
        format!(
            "EXISTS (SELECT 1 FROM json_each(\"game\".\"{}\") WHERE json_each.value = ?)",
            column
        ),
        [value.to_string()],
    ))
}

/// Escapes `LIKE` metacharacters so `value` matches literally with `ESCAPE '\\'`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
