//! The gateway capability trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::MpesaError;
use crate::payload::{
    B2bPayload, B2cPayload, C2bPayload, CustomerNameQuery, ReversalPayload, StatusQuery,
};

/// The six operations a configured gateway client offers.
///
/// Responses are passed through as raw JSON: the façade forwards whatever
/// the gateway answers without reinterpreting it. Object-safe so the
/// configuration store can hold an `Arc<dyn PaymentGateway>` and swap
/// implementations (live client, test double) at runtime.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn b2c(&self, payload: B2cPayload) -> Result<Value, MpesaError>;

    async fn c2b(&self, payload: C2bPayload) -> Result<Value, MpesaError>;

    async fn b2b(&self, payload: B2bPayload) -> Result<Value, MpesaError>;

    async fn reversal(&self, payload: ReversalPayload) -> Result<Value, MpesaError>;

    async fn status(&self, query: StatusQuery) -> Result<Value, MpesaError>;

    async fn customer_name(&self, query: CustomerNameQuery) -> Result<Value, MpesaError>;
}
