//! Handlers for the `/movies` resource.
//!
//! Missing required fields produce an error envelope with status 200.
//! Database failures propagate as [`AppError`](crate::error::AppError).

use axum::extract::{Path, State};
use axum::Json;
use movies_core::movie::{
    self, MissingParameter, MSG_ALL_DELETED, MSG_DELETED, MSG_INSERTED, MSG_UPDATED,
};
use movies_db::models::movie::CreateMovie;
use movies_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::extract::FormFields;
use crate::response::JsonResponse;
use crate::state::AppState;

/// GET /movies/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<JsonResponse>> {
    let movies = MovieRepo::list(&state.pool).await?;
    tracing::info!(count = movies.len(), "Listed movies");
    Ok(Json(JsonResponse::with_data(movies)))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    fields: FormFields,
) -> AppResult<Json<JsonResponse>> {
    let input = CreateMovie {
        movie_id: fields.value("movieid"),
        movie_name: fields.value("moviename"),
    };
    if let Err(missing) = movie::validate_create(&input.movie_id, &input.movie_name) {
        return Ok(missing_parameter(missing));
    }

    let id = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id,
        movie_id = %input.movie_id,
        movie_name = %input.movie_name,
        "Inserted movie"
    );
    Ok(Json(JsonResponse::success(MSG_INSERTED)))
}

/// DELETE /movies/{movieid}
pub async fn delete_one(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> AppResult<Json<JsonResponse>> {
    if let Err(missing) = movie::validate_delete(&movie_id) {
        return Ok(missing_parameter(missing));
    }

    let removed = MovieRepo::delete_by_movie_id(&state.pool, &movie_id).await?;
    tracing::info!(movie_id = %movie_id, removed, "Deleted movie");
    Ok(Json(JsonResponse::success(MSG_DELETED)))
}

/// DELETE /movies/
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Json<JsonResponse>> {
    let removed = MovieRepo::delete_all(&state.pool).await?;
    tracing::info!(removed, "Deleted all movies");
    Ok(Json(JsonResponse::success(MSG_ALL_DELETED)))
}

/// PUT /movies/{movieid}
pub async fn update(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    fields: FormFields,
) -> AppResult<Json<JsonResponse>> {
    if let Err(missing) = movie::validate_update(&movie_id) {
        return Ok(missing_parameter(missing));
    }

    let movie_name = fields.value("moviename");
    let updated = MovieRepo::update_name(&state.pool, &movie_id, &movie_name).await?;
    tracing::info!(movie_id = %movie_id, updated, "Updated movie name");
    Ok(Json(JsonResponse::success(MSG_UPDATED)))
}

fn missing_parameter(missing: MissingParameter) -> Json<JsonResponse> {
    tracing::debug!(message = missing.message(), "Rejected movie request");
    Json(JsonResponse::error(missing.message()))
}
