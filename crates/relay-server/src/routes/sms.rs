//! Inbound SMS webhook.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::Form;
use relay_core::InboundEvent;
use tracing::info;

use crate::error::{Result, ServerError};
use crate::state::AppState;
use crate::twiml::Twiml;

/// POST /sms
///
/// Accepts the provider's form-encoded event and answers with TwiML.
pub async fn inbound_sms(
    State(state): State<AppState>,
    form: std::result::Result<Form<InboundEvent>, FormRejection>,
) -> Result<Twiml> {
    let Form(event) = form.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    if event.sender.trim().is_empty() || event.recipient.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "From and To must not be empty".to_string(),
        ));
    }

    info!(sid = %event.message_sid, from = %event.sender, "Inbound SMS");
    let action = state.relay.handle(&event).await;
    Ok(Twiml::from_action(&action))
}
