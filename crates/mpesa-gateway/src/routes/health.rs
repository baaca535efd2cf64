use actix_web::{web, HttpResponse};

use crate::metrics::REGISTRY;
use crate::state::AppState;

/// GET /health - liveness plus whether a gateway client is configured.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "mpesa-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "configured": state.is_configured(),
    }))
}

/// GET /metrics - Prometheus metrics endpoint.
pub async fn metrics() -> HttpResponse {
    use prometheus::Encoder;

    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        tracing::error!("failed to encode metrics: {e}");
        return HttpResponse::InternalServerError().body("failed to encode metrics");
    }

    let output = String::from_utf8(buffer).unwrap_or_default();
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(output)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/metrics", web::get().to(metrics));
}
