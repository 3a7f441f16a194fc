//! Movie entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

/// A movie row from the `movies` table. The surrogate `id` is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    #[sqlx(rename = "movieid")]
    #[serde(rename = "movieid")]
    pub movie_id: String,
    #[sqlx(rename = "moviename")]
    #[serde(rename = "moviename")]
    pub movie_name: String,
}

/// DTO for inserting a new movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub movie_id: String,
    pub movie_name: String,
}
