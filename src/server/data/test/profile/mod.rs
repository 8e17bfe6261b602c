use crate::server::{
    data::profile::ProfileRepository,
    model::profile::{CreateProfileParam, UpdateProfileParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;
