//! Categoria route handlers.

use actix_web::{HttpResponse, web};

use bitacora_core::domain::NuevaCategoria;
use bitacora_shared::dto::CrearCategoriaRequest;
use bitacora_shared::response::ApiResponse;

use crate::error::{ApiError, HandlerError, HandlerResult};
use crate::state::AppState;

/// POST /categoria
pub async fn crear(
    state: web::Data<AppState>,
    body: web::Json<CrearCategoriaRequest>,
) -> Result<HttpResponse, ApiError> {
    crear_inner(&state, body.into_inner())
        .await
        .map_err(|e| ApiError::new("Error al cargar la categoria", e))
}

async fn crear_inner(state: &AppState, req: CrearCategoriaRequest) -> HandlerResult<HttpResponse> {
    let Some(nombre) = req.nombre.as_deref().filter(|s| !s.is_empty()) else {
        return Err(HandlerError::Validation(
            "No enviaste una categoria".to_string(),
        ));
    };

    if state.categorias.find_by_nombre(nombre).await?.is_some() {
        return Err(HandlerError::Conflict(
            "La categoria ya existe.".to_string(),
        ));
    }

    let nueva = state
        .categorias
        .insert(NuevaCategoria {
            nombre: nombre.to_owned(),
        })
        .await?;

    tracing::debug!(categoria_id = nueva.id, "Categoria created");

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Categoria agregada perfectamente", nueva)))
}
