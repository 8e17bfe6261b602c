//! Data transfer objects shared by the server API and the web client.
//!
//! Every DTO serializes with camelCase field names. The server converts its
//! domain models into these types at the controller boundary; the client
//! deserializes them straight from the JSON API.

pub mod api;
pub mod community;
pub mod feed;
pub mod game;
pub mod guide;
pub mod player;
pub mod profile;
pub mod seed;
pub mod user;
