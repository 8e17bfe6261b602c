use crate::{
    model::player::PlayerStatus,
    server::{data::player::PlayerRepository, error::AppError},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_by_game;
mod get_suggested;
