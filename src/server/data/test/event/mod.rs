use crate::{
    model::feed::EventKind,
    server::{data::event::EventRepository, error::AppError, model::event::CreateEventParam},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_recent_by_users;
