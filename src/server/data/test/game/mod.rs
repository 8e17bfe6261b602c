use crate::server::{
    data::game::{CreateGameParam, GameRepository},
    model::game::GameFilter,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_slug;
mod find_similar;
mod list;
