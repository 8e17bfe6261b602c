use sea_orm::entity::prelude::*;

use crate::string_list::StringList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cover_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub platforms: StringList,
    #[sea_orm(column_type = "Text")]
    pub genres: StringList,
    #[sea_orm(column_type = "Text")]
    pub tags: StringList,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::community::Entity")]
    Community,
    #[sea_orm(has_many = "super::guide::Entity")]
    Guide,
    #[sea_orm(has_many = "super::play_guide::Entity")]
    PlayGuide,
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
    #[sea_orm(has_many = "super::game_version::Entity")]
    GameVersion,
    #[sea_orm(has_many = "super::user_game::Entity")]
    UserGame,
}

impl Related<super::community::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Community.def()
    }
}

impl Related<super::guide::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guide.def()
    }
}

impl Related<super::play_guide::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayGuide.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::game_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameVersion.def()
    }
}

impl Related<super::user_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
