//! SeaORM entities mirroring the persisted table layout.

pub mod categoria;
pub mod post;
