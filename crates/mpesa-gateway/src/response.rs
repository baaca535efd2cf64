use serde::Serialize;
use serde_json::Value;

/// The uniform response body: `success` and `message` are always present,
/// the optional fields only when they carry something.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigSummary>,
}

/// Non-secret echo of the active configuration, returned by configure.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub environment: String,
    pub ssl: bool,
}

impl Envelope {
    pub fn ok(message: &str, data: Value) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
            error: None,
            config: None,
        }
    }

    pub fn configured(message: &str, environment: String, ssl: bool) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
            error: None,
            config: Some(ConfigSummary { environment, ssl }),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            error: None,
            config: None,
        }
    }

    pub fn failure_with_error(message: &str, error: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            data: None,
            error: Some(error.to_string()),
            config: None,
        }
    }
}
