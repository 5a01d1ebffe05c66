//! # Bitácora Infrastructure
//!
//! Concrete implementations of the ports defined in `bitacora-core`:
//! the SeaORM entities for the `Categoria` and `Post` tables, connection
//! management, non-destructive schema sync, and the Postgres repositories.

pub mod database;

pub use database::{DatabaseConfig, PostgresCategoriaRepository, PostgresPostRepository};
