//! Coerced transaction payloads, as handed to the gateway.
//!
//! Field sets and types follow the OpenAPI contract: amounts are floats,
//! agent and reference identifiers are integers, MSISDNs and credentials
//! stay as strings.

use serde::{Deserialize, Serialize};

/// Business-to-client transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2cPayload {
    pub value: f64,
    pub client_number: String,
    pub agent_id: u64,
    pub transaction_reference: u64,
    pub third_party_reference: u64,
}

/// Client-to-business charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct C2bPayload {
    pub value: f64,
    pub client_number: String,
    pub agent_id: u64,
    pub transaction_reference: u64,
    pub third_party_reference: u64,
}

/// Business-to-business transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct B2bPayload {
    pub value: f64,
    pub agent_id: u64,
    pub agent_receiver_id: u64,
    pub transaction_reference: u64,
    pub third_party_reference: u64,
}

/// Reversal of a settled transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReversalPayload {
    pub value: f64,
    pub security_credential: String,
    pub indicator_identifier: String,
    pub transaction_id: String,
    pub agent_id: u64,
    pub third_party_reference: u64,
}

/// Transaction status lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusQuery {
    pub transaction_id: String,
    pub agent_id: u64,
    pub third_party_reference: u64,
}

/// Registered-customer name lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerNameQuery {
    pub client_number: String,
    pub agent_id: u64,
    pub third_party_reference: u64,
}
