//! Outcome of one independently loaded slice of an aggregated view.

use std::fmt::Display;

use dioxus_logger::tracing;

use crate::model::api::SectionDto;

#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Ok(T),
    /// Client-facing message; the underlying error is only logged.
    Error(String),
}

impl<T> Section<T> {
    /// Wraps a sub-query result, logging the failure under `name`.
    pub fn from_result<E: Display>(name: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Section::Ok(data),
            Err(err) => {
                tracing::warn!("Failed to load {}: {}", name, err);
                Section::Error(format!("Failed to load {}", name))
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Section::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Section::Ok(data) => Some(data),
            Section::Error(_) => None,
        }
    }

    pub fn into_dto<U>(self, f: impl FnOnce(T) -> U) -> SectionDto<U> {
        match self {
            Section::Ok(data) => SectionDto::Ok { data: f(data) },
            Section::Error(error) => SectionDto::Error { error },
        }
    }
}
