pub mod health;
pub mod message;
pub mod project;
pub mod sqlx_repo;
