//! Client for the M-Pesa Mozambique OpenAPI.
//!
//! The [`PaymentGateway`] trait is the capability surface: six operations,
//! each taking a coerced payload and returning the gateway's JSON response.
//! [`MpesaClient`] is the HTTP implementation; callers that only need the
//! capability (e.g. an HTTP façade, or tests) hold an
//! `Arc<dyn PaymentGateway>` instead of the concrete client.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod payload;

pub use client::MpesaClient;
pub use config::{Environment, MpesaConfig};
pub use error::MpesaError;
pub use gateway::PaymentGateway;
pub use payload::{
    B2bPayload, B2cPayload, C2bPayload, CustomerNameQuery, ReversalPayload, StatusQuery,
};
