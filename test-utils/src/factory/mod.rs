//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let game = factory::create_game(&db).await?;
//! let player = factory::create_player(&db, &user.discord_id, game.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .title("Zelda")
//!     .genres(vec!["action", "adventure"])
//!     .build()
//!     .await?;
//! ```

pub mod community;
pub mod event;
pub mod game;
pub mod guide;
pub mod helpers;
pub mod play_guide;
pub mod player;
pub mod profile;
pub mod user;

pub use community::create_community;
pub use event::create_event;
pub use game::create_game;
pub use guide::create_guide;
pub use play_guide::create_play_guide;
pub use player::create_player;
pub use profile::create_profile;
pub use user::create_user;
