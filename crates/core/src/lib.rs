//! Domain logic for the movie store service.
//!
//! Contains no database or HTTP dependencies: request validation, the fixed
//! user-facing messages, and the process readiness flag.

pub mod error;
pub mod movie;
pub mod readiness;
pub mod types;
