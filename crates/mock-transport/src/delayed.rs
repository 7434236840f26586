//! Delayed moderator - wraps another moderator with artificial latency.

use std::time::Duration;

use async_trait::async_trait;
use relay_core::{ModerationError, ModerationRequest, ModerationVerdict, Moderator};
use tokio::time::sleep;

/// A moderator that waits before delegating.
///
/// Useful for testing the relay's moderation timeout.
pub struct DelayedModerator<M: Moderator> {
    inner: M,
    delay: Duration,
}

impl<M: Moderator> DelayedModerator<M> {
    /// Wrap `inner` with the given delay.
    pub fn new(inner: M, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap `inner` with a delay in milliseconds.
    pub fn with_millis(inner: M, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<M: Moderator> Moderator for DelayedModerator<M> {
    async fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationVerdict, ModerationError> {
        sleep(self.delay).await;
        self.inner.moderate(request).await
    }

    fn name(&self) -> &str {
        "DelayedModerator"
    }
}
