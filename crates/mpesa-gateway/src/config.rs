use std::env;

const DEFAULT_PORT: u16 = 3111;
const DEFAULT_RATE_LIMIT_RPM: u32 = 120;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Server port.
    pub port: u16,
    /// CORS allowed origins (`*` allows any).
    pub allowed_origins: Vec<String>,
    /// Rate limit, requests per minute.
    pub rate_limit_rpm: u32,
    /// Directory to serve the static frontend from (None = API only).
    pub static_dir: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins: Vec<String> = env::var("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let rate_limit_rpm = env::var("RATE_LIMIT_RPM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_RPM);

        let static_dir = env::var("STATIC_DIR").ok().filter(|s| !s.is_empty());

        Self {
            port,
            allowed_origins,
            rate_limit_rpm,
            static_dir,
        }
    }
}
