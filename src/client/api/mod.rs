//! Browser-side calls to the JSON API.
//!
//! Every request includes credentials so the session cookie is sent.

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod community;
#[cfg(feature = "web")]
pub mod feed;
#[cfg(feature = "web")]
pub mod game;
#[cfg(feature = "web")]
pub mod player;
#[cfg(feature = "web")]
pub mod profile;
#[cfg(feature = "web")]
pub mod user;
