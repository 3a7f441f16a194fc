use movies_core::readiness::ReadinessFlag;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and the flag are reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: movies_db::DbPool,
    /// Set once by the startup task, read by `/readyz`.
    pub readiness: ReadinessFlag,
}
