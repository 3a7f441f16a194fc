//! The `{ "type", "data", "message" }` envelope returned by every movie endpoint.
//!
//! Fields that are not set are omitted from the serialized JSON, so a
//! message-only response carries no `data` key and vice versa.

use movies_db::models::movie::Movie;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Success,
    Error,
}

#[derive(Debug, Serialize)]
pub struct JsonResponse {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Movie>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JsonResponse {
    /// Success carrying the given movies. An empty list still serializes as `[]`.
    pub fn with_data(movies: Vec<Movie>) -> Self {
        Self {
            kind: ResponseType::Success,
            data: Some(movies),
            message: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Success,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Error,
            data: None,
            message: Some(message.into()),
        }
    }
}
