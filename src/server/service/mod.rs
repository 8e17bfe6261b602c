//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Logic**: Validation and domain rules such as lazy profile creation
//! - **Orchestration**: Running independent repository calls concurrently and
//!   assembling aggregated views
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod community;
pub mod feed;
pub mod game;
pub mod player;
pub mod profile;
pub mod seed;

#[cfg(test)]
mod test;
