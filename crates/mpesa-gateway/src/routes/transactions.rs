//! The six transaction endpoints.
//!
//! All handlers share one shape: snapshot the configured client, validate
//! and coerce the body fields, dispatch, wrap the outcome in the envelope.
//! The snapshot is taken once per request, so a concurrent reconfigure
//! never swaps the client out from under an in-flight call.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::Value;

use mpesa_api::{
    B2bPayload, B2cPayload, C2bPayload, CustomerNameQuery, MpesaError, PaymentGateway,
    ReversalPayload, StatusQuery,
};

use crate::error::ApiError;
use crate::metrics;
use crate::response::Envelope;
use crate::state::AppState;
use crate::validation::{require_amount, require_id, require_string};

const OP_B2C: &str = "B2C";
const OP_C2B: &str = "C2B";
const OP_B2B: &str = "B2B";
const OP_REVERSAL: &str = "Reversal";
const OP_STATUS: &str = "Status";
const OP_CUSTOMER_NAME: &str = "CustomerName";

fn gateway(state: &AppState) -> Result<Arc<dyn PaymentGateway>, ApiError> {
    state.snapshot().ok_or(ApiError::NotConfigured)
}

fn respond(operation: &str, result: Result<Value, MpesaError>) -> Result<HttpResponse, ApiError> {
    match result {
        Ok(data) => {
            metrics::record_transaction(operation, true);
            Ok(HttpResponse::Ok().json(Envelope::ok(&format!("{operation} processed"), data)))
        }
        Err(err) => {
            metrics::record_transaction(operation, false);
            Err(ApiError::gateway(operation, err))
        }
    }
}

/// POST /api/b2c - business-to-client transfer.
pub async fn b2c(
    body: web::Json<Value>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let gateway = gateway(&state)?;
    let payload = B2cPayload {
        value: require_amount(&body, "value", OP_B2C)?,
        client_number: require_string(&body, "client_number", OP_B2C)?,
        agent_id: require_id(&body, "agent_id", OP_B2C)?,
        transaction_reference: require_id(&body, "transaction_reference", OP_B2C)?,
        third_party_reference: require_id(&body, "third_party_reference", OP_B2C)?,
    };
    respond(OP_B2C, gateway.b2c(payload).await)
}

/// POST /api/c2b - client-to-business charge.
pub async fn c2b(
    body: web::Json<Value>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let gateway = gateway(&state)?;
    let payload = C2bPayload {
        value: require_amount(&body, "value", OP_C2B)?,
        client_number: require_string(&body, "client_number", OP_C2B)?,
        agent_id: require_id(&body, "agent_id", OP_C2B)?,
        transaction_reference: require_id(&body, "transaction_reference", OP_C2B)?,
        third_party_reference: require_id(&body, "third_party_reference", OP_C2B)?,
    };
    respond(OP_C2B, gateway.c2b(payload).await)
}

/// POST /api/b2b - business-to-business transfer.
pub async fn b2b(
    body: web::Json<Value>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let gateway = gateway(&state)?;
    let payload = B2bPayload {
        value: require_amount(&body, "value", OP_B2B)?,
        agent_id: require_id(&body, "agent_id", OP_B2B)?,
        agent_receiver_id: require_id(&body, "agent_receiver_id", OP_B2B)?,
        transaction_reference: require_id(&body, "transaction_reference", OP_B2B)?,
        third_party_reference: require_id(&body, "third_party_reference", OP_B2B)?,
    };
    respond(OP_B2B, gateway.b2b(payload).await)
}

/// POST /api/reversal - reverse a settled transaction.
pub async fn reversal(
    body: web::Json<Value>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let gateway = gateway(&state)?;
    let payload = ReversalPayload {
        value: require_amount(&body, "value", OP_REVERSAL)?,
        security_credential: require_string(&body, "security_credential", OP_REVERSAL)?,
        indicator_identifier: require_string(&body, "indicator_identifier", OP_REVERSAL)?,
        transaction_id: require_string(&body, "transaction_id", OP_REVERSAL)?,
        agent_id: require_id(&body, "agent_id", OP_REVERSAL)?,
        third_party_reference: require_id(&body, "third_party_reference", OP_REVERSAL)?,
    };
    respond(OP_REVERSAL, gateway.reversal(payload).await)
}

/// POST /api/status - transaction status lookup.
pub async fn status(
    body: web::Json<Value>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let gateway = gateway(&state)?;
    let query = StatusQuery {
        transaction_id: require_string(&body, "transaction_id", OP_STATUS)?,
        agent_id: require_id(&body, "agent_id", OP_STATUS)?,
        third_party_reference: require_id(&body, "third_party_reference", OP_STATUS)?,
    };
    respond(OP_STATUS, gateway.status(query).await)
}

/// POST /api/customer-name - registered-customer name lookup.
pub async fn customer_name(
    body: web::Json<Value>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let gateway = gateway(&state)?;
    let query = CustomerNameQuery {
        client_number: require_string(&body, "client_number", OP_CUSTOMER_NAME)?,
        agent_id: require_id(&body, "agent_id", OP_CUSTOMER_NAME)?,
        third_party_reference: require_id(&body, "third_party_reference", OP_CUSTOMER_NAME)?,
    };
    respond(OP_CUSTOMER_NAME, gateway.customer_name(query).await)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/b2c", web::post().to(b2c))
        .route("/api/c2b", web::post().to(c2b))
        .route("/api/b2b", web::post().to(b2b))
        .route("/api/reversal", web::post().to(reversal))
        .route("/api/status", web::post().to(status))
        .route("/api/customer-name", web::post().to(customer_name));
}
