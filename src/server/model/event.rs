//! Activity events and the feed built from them.

use chrono::{DateTime, Utc};

use crate::{
    model::feed::{EventAuthorDto, EventDto, EventGameDto, EventKind, FeedDto},
    server::{error::internal::InternalError, model::profile::Profile},
};

pub const FEED_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub user_id: Option<String>,
    pub game_id: Option<i32>,
    pub kind: EventKind,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, InternalError> {
        let kind = EventKind::parse(&entity.kind).ok_or_else(|| InternalError::InvalidEnumValue {
            table: "event",
            column: "kind",
            value: entity.kind.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            kind,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub user_id: Option<String>,
    pub game_id: Option<i32>,
    pub kind: EventKind,
    pub title: String,
    pub description: Option<String>,
}

/// An event joined with its author's profile and game, when present.
#[derive(Debug, Clone, PartialEq)]
pub struct EventView {
    pub event: Event,
    pub author: Option<Profile>,
    pub game: Option<(String, String)>,
}

impl EventView {
    pub fn into_dto(self) -> EventDto {
        let author = match (self.event.user_id.as_deref(), self.author.as_ref()) {
            (_, Some(profile)) => Some(EventAuthorDto {
                user_id: profile.user_id.clone(),
                username: Some(profile.username.clone()),
                display_name: profile.resolved_name(),
            }),
            (Some(user_id), None) => Some(EventAuthorDto {
                user_id: user_id.to_string(),
                username: None,
                display_name: crate::model::player::placeholder_name(user_id),
            }),
            (None, None) => None,
        };

        EventDto {
            id: self.event.id,
            kind: self.event.kind,
            title: self.event.title,
            description: self.event.description,
            author,
            game: self
                .game
                .map(|(slug, title)| EventGameDto { slug, title }),
            created_at: self.event.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Feed {
    pub profile: Profile,
    pub following_count: u64,
    pub events: Vec<EventView>,
}

impl Feed {
    pub fn into_dto(self) -> FeedDto {
        FeedDto {
            username: self.profile.username,
            following_count: self.following_count,
            events: self.events.into_iter().map(EventView::into_dto).collect(),
        }
    }
}
