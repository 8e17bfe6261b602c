//! SeaORM entities for the GameHub schema.
//!
//! Each module maps one table created by the `migration` crate. List-valued
//! columns (platforms, genres, tags, steps) are stored as JSON text through
//! [`string_list::StringList`].

pub mod prelude;

pub mod string_list;

pub mod community;
pub mod event;
pub mod follow;
pub mod game;
pub mod game_version;
pub mod guide;
pub mod play_guide;
pub mod player;
pub mod profile;
pub mod user;
pub mod user_community;
pub mod user_game;
