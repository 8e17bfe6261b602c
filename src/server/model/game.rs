//! Game domain models, listing filters and the aggregated detail view.

use chrono::{DateTime, Utc};

use crate::{
    model::game::{GameDetailDto, GameDto, GameVersionDto, PlayStatus, UserGameDto},
    server::{
        error::internal::InternalError,
        model::{
            community::Community,
            guide::{Guide, PlayGuide},
            player::PlayerWithIdentity,
            section::Section,
        },
    },
};

pub const DEFAULT_LIST_LIMIT: u64 = 24;
pub const MAX_LIST_LIMIT: u64 = 100;
pub const SIMILAR_GAMES_LIMIT: u64 = 8;
pub const VERSIONS_LIMIT: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            cover_url: self.cover_url,
            platforms: self.platforms,
            genres: self.genres,
            tags: self.tags,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            cover_url: entity.cover_url,
            platforms: entity.platforms.into_inner(),
            genres: entity.genres.into_inner(),
            tags: entity.tags.into_inner(),
            created_at: entity.created_at,
        }
    }
}

/// Listing filters. Empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct GameFilter {
    pub query: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl Default for GameFilter {
    fn default() -> Self {
        Self {
            query: None,
            genre: None,
            platform: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl GameFilter {
    /// Builds a filter, dropping blank values and clamping `limit` to `1..=100`.
    pub fn new(
        query: Option<String>,
        genre: Option<String>,
        platform: Option<String>,
        limit: u64,
        offset: u64,
    ) -> Self {
        Self {
            query: non_blank(query),
            genre: non_blank(genre),
            platform: non_blank(platform),
            limit: limit.clamp(1, MAX_LIST_LIMIT),
            offset,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameVersion {
    pub id: i32,
    pub game_id: i32,
    pub version: String,
    pub notes: Option<String>,
    pub released_at: DateTime<Utc>,
}

impl GameVersion {
    pub fn into_dto(self) -> GameVersionDto {
        GameVersionDto {
            id: self.id,
            version: self.version,
            notes: self.notes,
            released_at: self.released_at,
        }
    }

    pub fn from_entity(entity: entity::game_version::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            version: entity.version,
            notes: entity.notes,
            released_at: entity.released_at,
        }
    }
}

/// A user's tracking entry for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct UserGame {
    pub user_id: String,
    pub game_id: i32,
    pub status: PlayStatus,
    pub favorite: bool,
    pub updated_at: DateTime<Utc>,
}

impl UserGame {
    pub fn into_dto(self) -> UserGameDto {
        UserGameDto {
            game_id: self.game_id,
            status: self.status,
            favorite: self.favorite,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::user_game::Model) -> Result<Self, InternalError> {
        let status =
            PlayStatus::parse(&entity.status).ok_or_else(|| InternalError::InvalidEnumValue {
                table: "user_game",
                column: "status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            user_id: entity.user_id,
            game_id: entity.game_id,
            status,
            favorite: entity.favorite,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SetGameStatusParam {
    pub user_id: String,
    pub game_id: i32,
    pub status: PlayStatus,
    pub favorite: bool,
}

/// A game with every related slice loaded independently.
#[derive(Debug, Clone)]
pub struct GameDetail {
    pub game: Game,
    pub communities: Section<Vec<Community>>,
    pub guides: Section<Vec<Guide>>,
    pub play_guides: Section<Vec<PlayGuide>>,
    pub players: Section<Vec<PlayerWithIdentity>>,
    pub similar_games: Section<Vec<Game>>,
    pub versions: Section<Vec<GameVersion>>,
    pub viewer_status: Section<Option<UserGame>>,
}

impl GameDetail {
    pub fn into_dto(self) -> GameDetailDto {
        GameDetailDto {
            game: self.game.into_dto(),
            communities: self
                .communities
                .into_dto(|c| c.into_iter().map(Community::into_dto).collect()),
            guides: self
                .guides
                .into_dto(|g| g.into_iter().map(Guide::into_dto).collect()),
            play_guides: self
                .play_guides
                .into_dto(|g| g.into_iter().map(PlayGuide::into_dto).collect()),
            players: self
                .players
                .into_dto(|p| p.into_iter().map(PlayerWithIdentity::into_dto).collect()),
            similar_games: self
                .similar_games
                .into_dto(|g| g.into_iter().map(Game::into_dto).collect()),
            versions: self
                .versions
                .into_dto(|v| v.into_iter().map(GameVersion::into_dto).collect()),
            viewer_status: self
                .viewer_status
                .into_dto(|status| status.map(UserGame::into_dto)),
        }
    }
}
