//! Profile domain models and the aggregated public profile view.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        player::resolve_display_name,
        profile::{ProfileDto, ProfileStatsDto, TrackedGameDto},
    },
    server::model::{
        community::Community,
        event::EventView,
        game::{Game, UserGame},
        guide::Guide,
    },
};

pub const USERNAME_MAX_LEN: usize = 24;
pub const DISPLAY_NAME_MAX_LEN: usize = 50;
pub const BIO_MAX_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            username: entity.username,
            display_name: entity.display_name,
            avatar_url: entity.avatar_url,
            bio: entity.bio,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Display name, then username, then the identity placeholder.
    pub fn resolved_name(&self) -> String {
        resolve_display_name(
            self.display_name.as_deref(),
            Some(&self.username),
            &self.user_id,
        )
    }
}

/// Fields written when a profile is created lazily.
#[derive(Debug, Clone)]
pub struct CreateProfileParam {
    pub user_id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Editable profile fields after validation. `None` clears the field.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProfileParam {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStats {
    pub games: u64,
    pub communities: u64,
    pub guides: u64,
    pub followers: u64,
    pub following: u64,
}

impl ProfileStats {
    pub fn into_dto(self) -> ProfileStatsDto {
        ProfileStatsDto {
            games: self.games,
            communities: self.communities,
            guides: self.guides,
            followers: self.followers,
            following: self.following,
        }
    }
}

/// A profile with everything shown on its public page.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub stats: ProfileStats,
    pub games: Vec<(Game, UserGame)>,
    pub communities: Vec<Community>,
    pub guides: Vec<Guide>,
    pub events: Vec<EventView>,
    pub is_following: bool,
    pub is_self: bool,
}

impl ProfileView {
    pub fn into_dto(self) -> ProfileDto {
        let display_name = self.profile.resolved_name();

        let favorite_games = self
            .games
            .iter()
            .filter(|(_, tracked)| tracked.favorite)
            .map(|(game, _)| game.clone().into_dto())
            .collect();

        let games = self
            .games
            .into_iter()
            .map(|(game, tracked)| TrackedGameDto {
                game: game.into_dto(),
                status: tracked.status,
                favorite: tracked.favorite,
            })
            .collect();

        ProfileDto {
            id: self.profile.id,
            user_id: self.profile.user_id,
            username: self.profile.username,
            display_name,
            avatar_url: self.profile.avatar_url,
            bio: self.profile.bio,
            stats: self.stats.into_dto(),
            favorite_games,
            games,
            communities: self
                .communities
                .into_iter()
                .map(Community::into_dto)
                .collect(),
            guides: self.guides.into_iter().map(Guide::into_dto).collect(),
            events: self.events.into_iter().map(EventView::into_dto).collect(),
            is_following: self.is_following,
            is_self: self.is_self,
        }
    }
}
