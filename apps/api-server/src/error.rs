//! Error boundary for the handlers.
//!
//! Handler failures stay distinguishable internally (validation, missing
//! reference, uniqueness conflict, data access), but the wire contract
//! flattens every kind to HTTP 413 with a `{mensaje, error}` body; callers
//! tell them apart only by the error text.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use bitacora_core::error::RepoError;
use bitacora_shared::ErrorResponse;

/// Failure kinds a handler can hit before or during its single write/read.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Required input absent or empty.
    #[error("{0}")]
    Validation(String),

    /// Referenced post or categoria does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unique titulo or nombre already taken.
    #[error("{0}")]
    Conflict(String),

    /// Data-access failure, propagated from the gateway.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// A handler failure paired with its route's fixed mensaje.
#[derive(Debug, Error)]
#[error("{mensaje}: {source}")]
pub struct ApiError {
    mensaje: &'static str,
    source: HandlerError,
}

impl ApiError {
    pub fn new(mensaje: &'static str, source: HandlerError) -> Self {
        Self { mensaje, source }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        // Uniform for every kind, validation included.
        StatusCode::PAYLOAD_TOO_LARGE
    }

    fn error_response(&self) -> HttpResponse {
        match &self.source {
            HandlerError::Repo(e) => tracing::error!(error = %e, "Data-access failure"),
            other => tracing::debug!(error = %other, "Request rejected"),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            mensaje: self.mensaje.to_string(),
            error: self.source.to_string(),
        })
    }
}

/// Result alias for handler bodies before the route mensaje is attached.
pub type HandlerResult<T> = Result<T, HandlerError>;
