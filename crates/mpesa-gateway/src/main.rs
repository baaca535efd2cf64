use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mpesa_gateway::{config::GatewayConfig, metrics::register_metrics, routes, state::AppState};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from_env();
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();
    let static_dir = config.static_dir.clone();

    tracing::info!("Starting mpesa-gateway on port {}", port);
    tracing::info!("Allowed origins: {:?}", allowed_origins);

    register_metrics();

    // One client slot for the whole process; configured over HTTP, not at
    // startup. State does not survive a restart.
    let state = web::Data::new(AppState::new());

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_minute(config.rate_limit_rpm as u64)
        .finish()
        .expect("Failed to create rate limiter config");

    if let Some(ref dir) = static_dir {
        tracing::info!("Serving frontend from: {}", dir);
    }

    HttpServer::new(move || {
        let cors = mpesa_gateway::cors::build_cors(&allowed_origins);

        let mut app = App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(Governor::new(&governor_conf))
            .configure(routes::health::configure)
            .configure(routes::configure::configure)
            .configure(routes::transactions::configure);

        // Serve the static frontend last (catch-all) if configured
        if let Some(ref dir) = static_dir {
            app = app.service(actix_files::Files::new("/", dir).index_file("index.html"));
        }

        app
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
