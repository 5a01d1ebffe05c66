//! Database connection management, schema sync, and repositories.

mod connections;
mod postgres_repo;
mod schema;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use postgres_repo::{PostgresCategoriaRepository, PostgresPostRepository};
pub use schema::sync_schema;
