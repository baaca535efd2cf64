use actix_web::{web, HttpResponse};
use serde::Deserialize;

use mpesa_api::{Environment, MpesaConfig};

use crate::error::ApiError;
use crate::metrics;
use crate::response::Envelope;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConfigureRequest {
    pub api_key: Option<String>,
    pub public_key: Option<String>,
    /// Defaults to `development`.
    pub environment: Option<String>,
    /// Defaults to `true`; an explicit `false` is honored.
    pub ssl: Option<bool>,
}

/// POST /api/configure - build and store the gateway client.
///
/// A successful call unconditionally replaces any prior client. On failure
/// the previous client (if any) stays active.
pub async fn configure_gateway(
    body: web::Json<ConfigureRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let api_key = request.api_key.unwrap_or_default();
    let public_key = request.public_key.unwrap_or_default();
    if api_key.trim().is_empty() || public_key.trim().is_empty() {
        metrics::record_configure(false);
        return Err(ApiError::Validation(
            "API Key e Public Key são obrigatórios".to_string(),
        ));
    }

    let environment: Environment = request
        .environment
        .as_deref()
        .unwrap_or("development")
        .parse()
        .map_err(|e: mpesa_api::MpesaError| {
            metrics::record_configure(false);
            ApiError::Configuration(e.to_string())
        })?;
    let ssl = request.ssl.unwrap_or(true);

    let result = state.reconfigure(MpesaConfig {
        api_key,
        public_key,
        environment,
        ssl,
    });

    match result {
        Ok(()) => {
            metrics::record_configure(true);
            tracing::info!(%environment, ssl, "gateway configured");
            Ok(HttpResponse::Ok().json(Envelope::configured(
                "API Mpesa configurada com sucesso",
                environment.to_string(),
                ssl,
            )))
        }
        Err(e) => {
            metrics::record_configure(false);
            Err(ApiError::Configuration(e.to_string()))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/configure", web::post().to(configure_gateway));
}
