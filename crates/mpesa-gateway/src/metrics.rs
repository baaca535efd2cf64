use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::LazyLock;

pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Transactions dispatched to the gateway, by operation and outcome.
pub static TRANSACTIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gateway_transactions_total",
            "Total transactions dispatched to the payment gateway",
        ),
        &["operation", "outcome"],
    )
    .unwrap()
});

/// Configure attempts, by outcome.
pub static CONFIGURES_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        Opts::new("gateway_configures_total", "Total configure attempts"),
        &["outcome"],
    )
    .unwrap()
});

/// Register all metrics with the registry. Idempotent across test runs:
/// re-registration errors are ignored.
pub fn register_metrics() {
    let _ = REGISTRY.register(Box::new(TRANSACTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CONFIGURES_TOTAL.clone()));
}

pub fn record_transaction(operation: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    TRANSACTIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

pub fn record_configure(success: bool) {
    let outcome = if success { "success" } else { "failure" };
    CONFIGURES_TOTAL.with_label_values(&[outcome]).inc();
}
