pub mod health;
pub mod movie;
