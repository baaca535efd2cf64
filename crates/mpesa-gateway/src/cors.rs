//! CORS configuration for the façade.

use actix_cors::Cors;

/// Build the CORS middleware from allowed origins.
///
/// The default configuration allows any origin (`*`), matching the open
/// CORS policy of the playground frontend. A deployment can restrict this
/// via `ALLOWED_ORIGINS`.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let allowed = allowed_origins.to_vec();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            let origin_str = origin.to_str().unwrap_or("");
            allowed.iter().any(|a| a == "*" || a == origin_str)
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::ORIGIN,
            actix_web::http::header::ACCEPT,
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
        .max_age(3600)
}
