use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MpesaError;

/// Target API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Hostname of the OpenAPI endpoint for this environment.
    pub fn host(&self) -> &'static str {
        match self {
            Environment::Development => "api.sandbox.vm.co.mz",
            Environment::Production => "api.vm.co.mz",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = MpesaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(MpesaError::Config(format!(
                "unknown environment '{other}' (expected 'development' or 'production')"
            ))),
        }
    }
}

/// Credentials and connection settings for a gateway client.
///
/// Immutable once a client is constructed from it; reconfiguring the
/// façade builds a fresh client from a fresh config.
#[derive(Clone)]
pub struct MpesaConfig {
    pub api_key: String,
    pub public_key: String,
    pub environment: Environment,
    pub ssl: bool,
}

impl fmt::Debug for MpesaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MpesaConfig")
            .field("api_key", &"[REDACTED]")
            .field("public_key", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("ssl", &self.ssl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_environments() {
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "production".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn rejects_unknown_environment() {
        assert!("staging".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
        // Case-sensitive, matching the upstream SDK's literal strings
        assert!("Production".parse::<Environment>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for env in [Environment::Development, Environment::Production] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn debug_redacts_key_material() {
        let config = MpesaConfig {
            api_key: "secret-key".into(),
            public_key: "secret-public".into(),
            environment: Environment::Development,
            ssl: true,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(!rendered.contains("secret-public"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
