use chrono::{DateTime, Utc};

use crate::{model::community::CommunityDto, server::error::internal::InternalError};

#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub id: i32,
    pub game_id: i32,
    pub name: String,
    pub invite_url: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub online_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Community {
    pub fn into_dto(self) -> CommunityDto {
        CommunityDto {
            id: self.id,
            game_id: self.game_id,
            name: self.name,
            invite_url: self.invite_url,
            category: self.category,
            language: self.language,
            online_count: self.online_count,
        }
    }

    /// Rejects rows with a negative online count.
    pub fn from_entity(entity: entity::community::Model) -> Result<Self, InternalError> {
        let online_count =
            u32::try_from(entity.online_count).map_err(|_| InternalError::NegativeCount {
                table: "community",
                column: "online_count",
                value: entity.online_count as i64,
            })?;

        Ok(Self {
            id: entity.id,
            game_id: entity.game_id,
            name: entity.name,
            invite_url: entity.invite_url,
            category: entity.category,
            language: entity.language,
            online_count,
            created_at: entity.created_at,
        })
    }
}
