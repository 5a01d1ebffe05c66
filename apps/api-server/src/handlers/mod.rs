//! HTTP handlers and route configuration.

mod categorias;
mod posts;


use actix_web::web;

/// Configure all application routes.
///
/// `/post/categoria/{categoria}` is registered before `/post/{id}` so the
/// literal segment wins the match.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/post", web::post().to(posts::crear))
        .route("/post", web::get().to(posts::listar))
        .route(
            "/post/categoria/{categoria}",
            web::get().to(posts::listar_por_categoria),
        )
        .route("/post/{id}", web::get().to(posts::obtener))
        .route("/post/{id}", web::put().to(posts::actualizar))
        .route("/post/{id}", web::delete().to(posts::borrar))
        .route("/categoria", web::post().to(categorias::crear));
}
