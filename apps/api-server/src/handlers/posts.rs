//! Post route handlers: validation chain, lookups, one write or read,
//! envelope out.

use actix_web::{HttpResponse, web};

use bitacora_core::domain::{CambiosPost, NuevoPost};
use bitacora_shared::dto::{ActualizarPostRequest, CrearPostRequest, PostActualizadoData};
use bitacora_shared::response::ApiResponse;

use crate::error::{ApiError, HandlerError, HandlerResult};
use crate::state::AppState;

/// Presence check for body fields: absent and empty both count as missing.
fn presente(campo: &Option<String>) -> Option<&str> {
    campo.as_deref().filter(|s| !s.is_empty())
}

/// Path ids arrive as raw strings; anything that is not an integer fails
/// the lookup chain the same way a missing row does.
fn parse_id(raw: &str) -> HandlerResult<i32> {
    raw.parse()
        .map_err(|_| HandlerError::NotFound("No existe un post con tal id".to_string()))
}

fn no_existe_post() -> HandlerError {
    HandlerError::NotFound("No existe un post con tal id".to_string())
}

/// POST /post
pub async fn crear(
    state: web::Data<AppState>,
    body: web::Json<CrearPostRequest>,
) -> Result<HttpResponse, ApiError> {
    crear_inner(&state, body.into_inner())
        .await
        .map_err(|e| ApiError::new("Error al cargar el post", e))
}

async fn crear_inner(state: &AppState, req: CrearPostRequest) -> HandlerResult<HttpResponse> {
    let (Some(titulo), Some(contenido), Some(categoria)) = (
        presente(&req.titulo),
        presente(&req.contenido),
        presente(&req.categoria),
    ) else {
        return Err(HandlerError::Validation(
            "No enviaste todo los datos".to_string(),
        ));
    };

    let categoria = state
        .categorias
        .find_by_nombre(categoria)
        .await?
        .ok_or_else(|| HandlerError::NotFound("No existe tal categoria.".to_string()))?;

    if state.posts.find_by_titulo(titulo).await?.is_some() {
        return Err(HandlerError::Conflict("El titulo ya existe.".to_string()));
    }

    let nuevo = state
        .posts
        .insert(NuevoPost {
            titulo: titulo.to_owned(),
            contenido: contenido.to_owned(),
            categoria_id: categoria.id,
        })
        .await?;

    tracing::debug!(post_id = nuevo.id, "Post created");

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Post agregado perfectamente", nuevo)))
}

/// PUT /post/{id}
pub async fn actualizar(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ActualizarPostRequest>,
) -> Result<HttpResponse, ApiError> {
    actualizar_inner(&state, &path, body.into_inner())
        .await
        .map_err(|e| ApiError::new("Error al actualizar el post", e))
}

async fn actualizar_inner(
    state: &AppState,
    raw_id: &str,
    req: ActualizarPostRequest,
) -> HandlerResult<HttpResponse> {
    let id = parse_id(raw_id)?;

    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(no_existe_post)?;

    // Every update must name an existing categoria, content-only edits
    // included; an absent name takes the not-found path.
    let nombre = req.categoria.as_deref().unwrap_or_default();
    let categoria = state
        .categorias
        .find_by_nombre(nombre)
        .await?
        .ok_or_else(|| HandlerError::NotFound("Categoria no existe.".to_string()))?;

    state
        .posts
        .update(
            id,
            CambiosPost {
                contenido: req.contenido.clone(),
                categoria_id: categoria.id,
            },
        )
        .await?;

    // The body echoes the request, not the stored row: titulo is accepted
    // here but never persisted.
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Post actualizado perfectamente",
        PostActualizadoData {
            titulo: req.titulo,
            contenido: req.contenido,
            categoria_id: categoria.id,
        },
    )))
}

/// DELETE /post/{id}
pub async fn borrar(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    borrar_inner(&state, &path)
        .await
        .map_err(|e| ApiError::new("Error al borrar el post", e))
}

async fn borrar_inner(state: &AppState, raw_id: &str) -> HandlerResult<HttpResponse> {
    let id = parse_id(raw_id)?;

    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(no_existe_post)?;

    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message_only(
        "Post borrado perfectamente",
    )))
}

/// GET /post
pub async fn listar(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    listar_inner(&state)
        .await
        .map_err(|e| ApiError::new("Error", e))
}

async fn listar_inner(state: &AppState) -> HandlerResult<HttpResponse> {
    let posts = state.posts.list_resumen().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Encontrado.", posts)))
}

/// GET /post/{id}
pub async fn obtener(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    obtener_inner(&state, &path)
        .await
        .map_err(|e| ApiError::new("Error al buscar el id", e))
}

async fn obtener_inner(state: &AppState, raw_id: &str) -> HandlerResult<HttpResponse> {
    let id = parse_id(raw_id)?;

    let detalle = state
        .posts
        .find_detalle(id)
        .await?
        .ok_or_else(no_existe_post)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Encontrado.", detalle)))
}

/// GET /post/categoria/{categoria}
pub async fn listar_por_categoria(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    listar_por_categoria_inner(&state, &path)
        .await
        .map_err(|e| ApiError::new("Error al buscar los posts", e))
}

async fn listar_por_categoria_inner(
    state: &AppState,
    nombre: &str,
) -> HandlerResult<HttpResponse> {
    let categoria = state
        .categorias
        .find_by_nombre(nombre)
        .await?
        .ok_or_else(|| HandlerError::NotFound("No existe categoria".to_string()))?;

    let posts = state.posts.list_by_categoria(categoria.id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Encontrado.", posts)))
}
