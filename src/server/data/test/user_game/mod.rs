use crate::{
    model::game::PlayStatus,
    server::{
        data::user_game::UserGameRepository, error::AppError, model::game::SetGameStatusParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
