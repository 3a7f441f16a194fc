//! Movie input validation and the fixed messages returned to clients.
//!
//! The only checks performed are presence checks: a required field must be a
//! non-empty string. Uniqueness of `movie_id` is left to the database.

/// A required request field was empty. Displays as the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MissingParameter(pub &'static str);

impl MissingParameter {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_MISSING_CREATE_FIELDS: &str = "You are missing movieID or movieName parameter.";
pub const MSG_MISSING_DELETE_ID: &str = "You are missing movieID parameter.";
pub const MSG_MISSING_UPDATE_ID: &str = "You are missing movieID parameter to update a movie.";

pub const MSG_INSERTED: &str = "The movie has been inserted successfully!";
pub const MSG_DELETED: &str = "The movie has been deleted successfully!";
pub const MSG_ALL_DELETED: &str = "All movies have been deleted successfully!";
pub const MSG_UPDATED: &str = "The moviename has been updated successfully!";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Both `movie_id` and `movie_name` are required to create a movie.
pub fn validate_create(movie_id: &str, movie_name: &str) -> Result<(), MissingParameter> {
    if movie_id.is_empty() || movie_name.is_empty() {
        return Err(MissingParameter(MSG_MISSING_CREATE_FIELDS));
    }
    Ok(())
}

pub fn validate_delete(movie_id: &str) -> Result<(), MissingParameter> {
    if movie_id.is_empty() {
        return Err(MissingParameter(MSG_MISSING_DELETE_ID));
    }
    Ok(())
}

/// Only the id is checked on update; an empty `movie_name` is written as-is.
pub fn validate_update(movie_id: &str) -> Result<(), MissingParameter> {
    if movie_id.is_empty() {
        return Err(MissingParameter(MSG_MISSING_UPDATE_ID));
    }
    Ok(())
}
