//! Repository for the `movies` table.

use movies_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list for `Movie` queries.
const COLUMNS: &str = "movieID, movieName";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Insert a new movie, returning its surrogate id.
    ///
    /// A duplicate `movie_id` surfaces as a unique violation on
    /// `uq_movies_movie_id`.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies (movieID, movieName) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.movie_id)
        .bind(&input.movie_name)
        .fetch_one(pool)
        .await
    }

    /// Delete all rows with the given `movie_id`. Returns the number removed.
    pub async fn delete_by_movie_id(pool: &PgPool, movie_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE movieID = $1")
            .bind(movie_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every movie. Returns the number removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Rename all rows with the given `movie_id`. Returns the number updated.
    pub async fn update_name(
        pool: &PgPool,
        movie_id: &str,
        movie_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE movies SET movieName = $2 WHERE movieID = $1")
            .bind(movie_id)
            .bind(movie_name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
