//! HTTP implementation of [`PaymentGateway`] against the OpenAPI service.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::MpesaConfig;
use crate::error::MpesaError;
use crate::gateway::PaymentGateway;
use crate::payload::{
    B2bPayload, B2cPayload, C2bPayload, CustomerNameQuery, ReversalPayload, StatusQuery,
};

/// Per-operation service ports, as published by the OpenAPI gateway.
const PORT_B2C: u16 = 18345;
const PORT_B2B: u16 = 18349;
const PORT_C2B: u16 = 18352;
const PORT_STATUS: u16 = 18353;
const PORT_REVERSAL: u16 = 18354;
const PORT_CUSTOMER_NAME: u16 = 18348;

const PATH_B2C: &str = "/ipg/v1x/b2cPayment/";
const PATH_B2B: &str = "/ipg/v1x/b2bPayment/";
const PATH_C2B: &str = "/ipg/v1x/c2bPayment/singleStage/";
const PATH_STATUS: &str = "/ipg/v1x/queryTransactionStatus/";
const PATH_REVERSAL: &str = "/ipg/v1x/reversal/";
const PATH_CUSTOMER_NAME: &str = "/ipg/v1x/queryCustomerName/";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Live gateway client.
///
/// One `reqwest::Client` per instance; the façade builds a new instance on
/// every reconfigure and drops the old one.
pub struct MpesaClient {
    config: MpesaConfig,
    http: reqwest::Client,
}

impl MpesaClient {
    /// Build a client from credentials.
    ///
    /// Rejects empty key material up front so a misconfigured façade fails
    /// at configure time, not on the first transaction.
    pub fn connect(config: MpesaConfig) -> Result<Self, MpesaError> {
        if config.api_key.trim().is_empty() {
            return Err(MpesaError::Config("api_key must not be empty".into()));
        }
        if config.public_key.trim().is_empty() {
            return Err(MpesaError::Config("public_key must not be empty".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MpesaError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn environment(&self) -> crate::config::Environment {
        self.config.environment
    }

    fn endpoint(&self, port: u16, path: &str) -> String {
        let scheme = if self.config.ssl { "https" } else { "http" };
        format!("{scheme}://{}:{port}{path}", self.config.environment.host())
    }

    async fn dispatch<T: Serialize>(
        &self,
        operation: &str,
        port: u16,
        path: &str,
        payload: &T,
    ) -> Result<Value, MpesaError> {
        let url = self.endpoint(port, path);
        tracing::debug!(operation, %url, "dispatching gateway request");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("Origin", "*")
            .json(payload)
            .send()
            .await
            .map_err(|e| MpesaError::Http(format!("{operation} request failed: {e}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MpesaError::Http(format!("{operation} response read failed: {e}")))?;

        if !status.is_success() {
            return Err(MpesaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PaymentGateway for MpesaClient {
    async fn b2c(&self, payload: B2cPayload) -> Result<Value, MpesaError> {
        self.dispatch("b2c", PORT_B2C, PATH_B2C, &payload).await
    }

    async fn c2b(&self, payload: C2bPayload) -> Result<Value, MpesaError> {
        self.dispatch("c2b", PORT_C2B, PATH_C2B, &payload).await
    }

    async fn b2b(&self, payload: B2bPayload) -> Result<Value, MpesaError> {
        self.dispatch("b2b", PORT_B2B, PATH_B2B, &payload).await
    }

    async fn reversal(&self, payload: ReversalPayload) -> Result<Value, MpesaError> {
        self.dispatch("reversal", PORT_REVERSAL, PATH_REVERSAL, &payload)
            .await
    }

    async fn status(&self, query: StatusQuery) -> Result<Value, MpesaError> {
        self.dispatch("status", PORT_STATUS, PATH_STATUS, &query)
            .await
    }

    async fn customer_name(&self, query: CustomerNameQuery) -> Result<Value, MpesaError> {
        self.dispatch(
            "customer_name",
            PORT_CUSTOMER_NAME,
            PATH_CUSTOMER_NAME,
            &query,
        )
        .await
    }
}
