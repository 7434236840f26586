//! Mock outbound senders.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use relay_core::{MessageSender, OutboundSms, SendReceipt, TransportError};

/// A sender that records every message and always succeeds.
///
/// Clones share the same record, so a test can keep one handle and give
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<OutboundSms>>>,
}

impl RecordingSender {
    /// Create an empty recording sender.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, in order.
    pub fn sent(&self) -> Vec<OutboundSms> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, message: &OutboundSms) -> Result<SendReceipt, TransportError> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| TransportError::Unavailable("recorder poisoned".to_string()))?;
        sent.push(message.clone());
        Ok(SendReceipt::with_sid(format!("SM{:032}", sent.len())))
    }

    fn name(&self) -> &str {
        "RecordingSender"
    }
}

/// A sender that rejects every message, counting the attempts.
#[derive(Debug, Clone)]
pub struct FailingSender {
    reason: String,
    attempts: Arc<Mutex<usize>>,
}

impl FailingSender {
    /// Reject with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of send attempts seen.
    pub fn attempts(&self) -> usize {
        self.attempts.lock().map(|n| *n).unwrap_or_default()
    }
}

impl Default for FailingSender {
    fn default() -> Self {
        Self::new("The 'To' number is not a valid phone number.")
    }
}

#[async_trait]
impl MessageSender for FailingSender {
    async fn send_message(&self, _message: &OutboundSms) -> Result<SendReceipt, TransportError> {
        if let Ok(mut attempts) = self.attempts.lock() {
            *attempts += 1;
        }
        Err(TransportError::Rejected(self.reason.clone()))
    }

    fn name(&self) -> &str {
        "FailingSender"
    }
}
