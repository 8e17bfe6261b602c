use super::create_domain_user;
use crate::{
    model::{feed::EventKind, profile::UpdateProfileDto},
    server::{error::AppError, service::profile::ProfileService},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure_profile;
mod follow;
mod get_by_username;
mod update;
