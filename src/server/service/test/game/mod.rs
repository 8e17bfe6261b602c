use super::create_domain_user;
use crate::{
    model::{feed::EventKind, game::PlayStatus, player::PlayerStatus},
    server::{error::AppError, model::section::Section, service::game::GameService},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_detail;
mod set_status;
