//! Database repository layer for all domain entities.
//!
//! Each repository holds a borrowed `DatabaseConnection` and performs the queries
//! for one table. Entity models are converted into domain models before they leave
//! this layer. "No rows" is reported as `Ok(None)` or an empty vector.

pub mod community;
pub mod event;
pub mod follow;
pub mod game;
pub mod game_version;
pub mod guide;
pub mod player;
pub mod profile;
pub mod user;
pub mod user_community;
pub mod user_game;

#[cfg(test)]
mod test;
