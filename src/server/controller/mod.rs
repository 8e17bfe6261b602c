//! HTTP request handlers.
//!
//! Controllers resolve the session user through `AuthGuard`, convert request
//! DTOs into service parameters, call the service layer and convert the result
//! back into DTOs. Every handler carries a `utoipa::path` annotation so the
//! router can assemble the OpenAPI document.

pub mod auth;
pub mod community;
pub mod dev;
pub mod feed;
pub mod game;
pub mod player;
pub mod profile;
