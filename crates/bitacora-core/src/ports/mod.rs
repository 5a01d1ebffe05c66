//! Ports - interfaces implemented by the infrastructure layer.

mod repository;

pub use repository::{CategoriaRepository, PostRepository};
