use chrono::{DateTime, Utc};

use crate::model::guide::{GuideDto, PlayGuideDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub id: i32,
    pub game_id: i32,
    pub title: String,
    pub content: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Guide {
    pub fn into_dto(self) -> GuideDto {
        GuideDto {
            id: self.id,
            game_id: self.game_id,
            title: self.title,
            content: self.content,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::guide::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            title: entity.title,
            content: entity.content,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayGuide {
    pub id: i32,
    pub game_id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub from_platform: String,
    pub to_platform: String,
    pub steps: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl PlayGuide {
    pub fn into_dto(self) -> PlayGuideDto {
        PlayGuideDto {
            id: self.id,
            game_id: self.game_id,
            title: self.title,
            summary: self.summary,
            from_platform: self.from_platform,
            to_platform: self.to_platform,
            steps: self.steps,
        }
    }

    pub fn from_entity(entity: entity::play_guide::Model) -> Self {
        Self {
            id: entity.id,
            game_id: entity.game_id,
            title: entity.title,
            summary: entity.summary,
            from_platform: entity.from_platform,
            to_platform: entity.to_platform,
            steps: entity.steps.into_inner(),
            created_at: entity.created_at,
        }
    }
}
