//! Inbound SMS webhook server.
//!
//! Receives provider webhooks on `POST /sms`, runs them through the relay
//! handler, and answers with TwiML.

mod config;
mod error;
mod routes;
mod state;
mod twiml;

use std::sync::Arc;

use moderation_client::ModerationClient;
use sms_relay::RelayHandler;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twilio_client::TwilioClient;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, owner = %config.relay.owner_number, "Starting relay server");

    // Build collaborators
    let sender = TwilioClient::new(config.twilio.clone())?;
    let moderator = ModerationClient::new(config.moderation.clone())?;
    info!(
        endpoint = %config.moderation.endpoint,
        timeout = ?config.relay.moderation_timeout,
        "Moderation configured"
    );

    let handler = RelayHandler::new(config.relay.clone(), Arc::new(sender), Arc::new(moderator));
    let state = AppState::new(handler);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Relay server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Relay server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
