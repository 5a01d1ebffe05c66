//! Domain entities - the persisted records and the read views the
//! endpoints serve.

mod categoria;

mod post;

pub use categoria::{Categoria, NuevaCategoria};
pub use post::{CambiosPost, CategoriaRef, NuevoPost, Post, PostDetalle, PostResumen};
