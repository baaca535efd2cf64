use std::sync::{Arc, RwLock};

use mpesa_api::{MpesaClient, MpesaConfig, MpesaError, PaymentGateway};

/// Builds a gateway client from credentials. Production state closes over
/// [`MpesaClient::connect`]; tests inject doubles here.
pub type GatewayFactory =
    Arc<dyn Fn(MpesaConfig) -> Result<Arc<dyn PaymentGateway>, MpesaError> + Send + Sync>;

/// Shared application state: the gateway factory and the single client slot.
///
/// The slot holds at most one client; configure replaces it wholesale.
/// Handlers take a snapshot (`Arc` clone) at dispatch and complete against
/// that client even if a concurrent reconfigure swaps the slot mid-flight.
/// The lock is only ever held for the clone or the swap, never across an
/// await.
#[derive(Clone)]
pub struct AppState {
    factory: GatewayFactory,
    slot: Arc<RwLock<Option<Arc<dyn PaymentGateway>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_factory(Arc::new(|config| {
            let client = MpesaClient::connect(config)?;
            Ok(Arc::new(client) as Arc<dyn PaymentGateway>)
        }))
    }

    pub fn with_factory(factory: GatewayFactory) -> Self {
        Self {
            factory,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Build a client from credentials and store it, replacing any prior
    /// client. On construction failure the slot is left untouched, so a
    /// previously configured client stays active.
    pub fn reconfigure(&self, config: MpesaConfig) -> Result<(), MpesaError> {
        let client = (self.factory)(config)?;
        let mut slot = self.slot.write().expect("gateway slot lock poisoned");
        *slot = Some(client);
        Ok(())
    }

    /// Current client, if any. The returned `Arc` stays valid for the whole
    /// transaction regardless of later reconfigures.
    pub fn snapshot(&self) -> Option<Arc<dyn PaymentGateway>> {
        self.slot
            .read()
            .expect("gateway slot lock poisoned")
            .clone()
    }

    pub fn is_configured(&self) -> bool {
        self.slot
            .read()
            .expect("gateway slot lock poisoned")
            .is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
