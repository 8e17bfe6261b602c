use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
};
use axum::{http::StatusCode, response::IntoResponse};
use test_utils::{builder::TestBuilder, factory};

mod optional;
mod require;
