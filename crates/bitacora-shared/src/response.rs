//! Response envelopes shared by every route.

use serde::{Deserialize, Serialize};

/// Successful envelope: the route's mensaje plus an optional payload.
/// Routes without a payload (delete) serialize as `{mensaje}` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(mensaje: impl Into<String>, data: T) -> Self {
        Self {
            mensaje: mensaje.into(),
            data: Some(data),
        }
    }

    pub fn message_only(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
            data: None,
        }
    }
}

/// Error envelope: the route's fixed mensaje plus the underlying error
/// text. Callers distinguish error kinds only by the `error` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub mensaje: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_data_keeps_both_keys() {
        let body = serde_json::to_value(ApiResponse::ok("Encontrado.", vec![1, 2])).unwrap();
        assert_eq!(body["mensaje"], "Encontrado.");
        assert_eq!(body["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn message_only_envelope_drops_data_key() {
        let body =
            serde_json::to_value(ApiResponse::<()>::message_only("Post borrado perfectamente"))
                .unwrap();
        assert_eq!(body["mensaje"], "Post borrado perfectamente");
        assert!(body.get("data").is_none());
    }
}
