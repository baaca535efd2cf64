use thiserror::Error;

/// Errors returned by gateway operations.
#[derive(Debug, Error)]
pub enum MpesaError {
    #[error("config error: {0}")]
    Config(String),

    /// Transport-level failure. The message already carries the operation
    /// context, and the façade surfaces it verbatim, so no prefix here.
    #[error("{0}")]
    Http(String),

    #[error("gateway rejected request ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
