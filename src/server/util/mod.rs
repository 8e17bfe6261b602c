//! Small helpers shared across controllers and services.

pub mod parse;
