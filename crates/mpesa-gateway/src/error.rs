use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::response::Envelope;

/// Failure taxonomy of the façade.
///
/// Every handler error funnels through [`ResponseError::error_response`]
/// and renders the uniform envelope; nothing reaches the transport layer
/// unmapped.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or unparseable. Always local, never retried.
    #[error("{0}")]
    Validation(String),

    /// A transaction arrived before any successful configure.
    #[error("API not configured. Configure first.")]
    NotConfigured,

    /// Gateway client construction failed.
    #[error("failed to configure gateway: {0}")]
    Configuration(String),

    /// The remote gateway call failed.
    #[error("error in {operation}: {message}")]
    Gateway { operation: String, message: String },
}

impl ApiError {
    pub fn gateway(operation: &str, err: mpesa_api::MpesaError) -> Self {
        ApiError::Gateway {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(message) => {
                HttpResponse::BadRequest().json(Envelope::failure(message))
            }
            ApiError::NotConfigured => {
                HttpResponse::BadRequest().json(Envelope::failure("API not configured. Configure first."))
            }
            ApiError::Configuration(detail) => {
                tracing::error!("gateway configuration failed: {detail}");
                HttpResponse::InternalServerError()
                    .json(Envelope::failure_with_error("Erro ao configurar API Mpesa", detail))
            }
            ApiError::Gateway { operation, message } => {
                tracing::error!("gateway call failed in {operation}: {message}");
                HttpResponse::InternalServerError().json(Envelope::failure_with_error(
                    &format!("Error in {operation}"),
                    message,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: ApiError) -> (u16, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status().as_u16();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_rt::test]
    async fn validation_maps_to_400_envelope() {
        let (status, body) = body_json(ApiError::Validation("All fields are required for B2C".into())).await;
        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "All fields are required for B2C");
        assert!(body.get("error").is_none());
    }

    #[actix_rt::test]
    async fn not_configured_maps_to_400() {
        let (status, body) = body_json(ApiError::NotConfigured).await;
        assert_eq!(status, 400);
        assert_eq!(body["message"], "API not configured. Configure first.");
    }

    #[actix_rt::test]
    async fn gateway_failure_maps_to_500_with_raw_error() {
        let (status, body) = body_json(ApiError::Gateway {
            operation: "B2C".into(),
            message: "timeout".into(),
        })
        .await;
        assert_eq!(status, 500);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Error in B2C");
        assert_eq!(body["error"], "timeout");
    }
}
