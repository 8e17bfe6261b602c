use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// One independently fetched slice of an aggregated view.
///
/// A slice that failed to load is reported as `{"status":"error"}` rather than
/// an empty list, so "nothing here" and "could not load" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SectionDto<T> {
    Ok { data: T },
    Error { error: String },
}

impl<T> SectionDto<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            SectionDto::Ok { data } => Some(data),
            SectionDto::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SectionDto::Ok { .. } => None,
            SectionDto::Error { error } => Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SectionDto::Ok { .. })
    }
}
