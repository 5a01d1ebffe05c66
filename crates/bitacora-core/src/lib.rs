//! # Bitácora Core
//!
//! The domain layer of the Bitácora blogging backend.
//! This crate contains the entities, read views, and repository ports,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
