//! HTTP routes.

mod health;
mod sms;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/sms", post(sms::inbound_sms))
}
