//! Application state shared across handlers.

use std::sync::Arc;

use sms_relay::RelayHandler;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The relay handler.
    pub relay: Arc<RelayHandler>,
}

impl AppState {
    /// Create new application state.
    pub fn new(relay: RelayHandler) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}
