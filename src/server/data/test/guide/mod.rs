use crate::server::data::guide::{GuideRepository, PlayGuideRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_author;
mod get_by_game;
