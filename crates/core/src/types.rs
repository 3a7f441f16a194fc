/// Surrogate primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;
