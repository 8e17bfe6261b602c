use crate::server::data::user_community::UserCommunityRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod join;
