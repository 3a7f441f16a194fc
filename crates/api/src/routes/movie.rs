//! Route definitions for the `/movies` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Movie CRUD routes, mounted at the root.
///
/// ```text
/// GET    /movies/             -> list
/// POST   /movies/             -> create
/// DELETE /movies/             -> delete_all
/// PUT    /movies/{movieid}    -> update
/// DELETE /movies/{movieid}    -> delete_one
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/movies/",
            get(movie::list)
                .post(movie::create)
                .delete(movie::delete_all),
        )
        .route(
            "/movies/{movieid}",
            put(movie::update).delete(movie::delete_one),
        )
}
