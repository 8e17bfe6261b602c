use crate::server::{data::community::CommunityRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_by_game;
