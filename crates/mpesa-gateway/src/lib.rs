pub mod config;
pub mod cors;
pub mod error;
pub mod metrics;
pub mod response;
pub mod routes;
pub mod state;
pub mod validation;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use response::Envelope;
pub use state::AppState;
