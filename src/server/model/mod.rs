//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Enumerated columns are parsed
//! strictly during conversion.

pub mod community;
pub mod event;
pub mod game;
pub mod guide;
pub mod player;
pub mod profile;
pub mod section;
pub mod seed;
pub mod user;
