//! Mock moderators.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use relay_core::{ModerationError, ModerationRequest, ModerationVerdict, Moderator};

/// A moderator that returns a fixed verdict and records each request.
#[derive(Debug, Clone, Default)]
pub struct StaticModerator {
    verdict: ModerationVerdict,
    requests: Arc<Mutex<Vec<ModerationRequest>>>,
}

impl StaticModerator {
    /// Always answer with `verdict`.
    pub fn new(verdict: ModerationVerdict) -> Self {
        Self {
            verdict,
            requests: Arc::default(),
        }
    }

    /// A verdict with every listed category set to `false`.
    pub fn clear(categories: &[&str]) -> Self {
        Self::with_behaviors(categories.iter().map(|c| (*c, false)))
    }

    /// A verdict with every listed category set to `true`.
    pub fn flagging(categories: &[&str]) -> Self {
        Self::with_behaviors(categories.iter().map(|c| (*c, true)))
    }

    /// A verdict built from explicit category flags.
    pub fn with_behaviors<'a>(behaviors: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let behaviors: BTreeMap<String, bool> = behaviors
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self::new(ModerationVerdict { behaviors })
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ModerationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Moderator for StaticModerator {
    async fn moderate(
        &self,
        request: &ModerationRequest,
    ) -> Result<ModerationVerdict, ModerationError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        Ok(self.verdict.clone())
    }

    fn name(&self) -> &str {
        "StaticModerator"
    }
}

/// A moderator that fails every call.
#[derive(Debug, Clone)]
pub struct FailingModerator {
    status: u16,
}

impl FailingModerator {
    /// Fail with the given HTTP status.
    pub fn with_status(status: u16) -> Self {
        Self { status }
    }
}

impl Default for FailingModerator {
    fn default() -> Self {
        Self::with_status(503)
    }
}

#[async_trait]
impl Moderator for FailingModerator {
    async fn moderate(
        &self,
        _request: &ModerationRequest,
    ) -> Result<ModerationVerdict, ModerationError> {
        Err(ModerationError::Status {
            status: self.status,
            body: "service unavailable".to_string(),
        })
    }

    fn name(&self) -> &str {
        "FailingModerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::{InboundEvent, ModerationProfile};

    fn request() -> ModerationRequest {
        let event = InboundEvent::new("+15559998888", "+15550009999", "hi");
        ModerationProfile::default().build_request(&event)
    }

    #[tokio::test]
    async fn test_static_moderator_clear() {
        let moderator = StaticModerator::clear(&["spam"]);
        let verdict = moderator.moderate(&request()).await.unwrap();

        assert!(!verdict.is_violation());
        assert_eq!(moderator.requests().len(), 1);
        assert_eq!(moderator.requests()[0].content.text, "hi");
    }

    #[tokio::test]
    async fn test_static_moderator_flagging() {
        let moderator = StaticModerator::flagging(&["spam"]);
        let verdict = moderator.moderate(&request()).await.unwrap();
        assert!(verdict.is_violation());
    }

    #[tokio::test]
    async fn test_failing_moderator() {
        let err = FailingModerator::default()
            .moderate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, ModerationError::Status { status: 503, .. }));
    }
}
