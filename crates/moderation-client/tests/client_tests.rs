//! Tests for the moderation client against a local stand-in webhook.
//!
//! Each test binds an axum server to an ephemeral port on 127.0.0.1.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use moderation_client::{ClientError, ModerationClient, ModerationConfig};
use relay_core::{InboundEvent, ModerationError, ModerationProfile, ModerationRequest, Moderator};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Seen {
    headers: Arc<Mutex<Vec<(String, String, String)>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

/// Start a webhook that answers every POST with `status` and `reply`.
async fn spawn_webhook(
    status: StatusCode,
    reply: &'static str,
    delay: Duration,
) -> (String, Seen) {
    let seen = Seen::default();

    let app = Router::new()
        .route(
            "/check",
            post(
                move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string()
                    };
                    seen.headers.lock().unwrap().push((
                        header("x-client-id"),
                        header("x-api-key"),
                        header("content-type"),
                    ));
                    seen.bodies.lock().unwrap().push(body);
                    tokio::time::sleep(delay).await;
                    (status, reply)
                },
            ),
        )
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{}/check", addr), seen)
}

fn request() -> ModerationRequest {
    let event = InboundEvent::new("+15559998888", "+15550009999", "buy now")
        .with_message_sid("SM1")
        .with_locality("Chicago", "IL");
    ModerationProfile::default().build_request(&event)
}

fn client(url: &str) -> ModerationClient {
    ModerationClient::new(ModerationConfig::new(url, "client-123", "key-456")).unwrap()
}

#[tokio::test]
async fn test_sends_credentials_and_request_body() {
    let (url, seen) =
        spawn_webhook(StatusCode::OK, r#"{"behaviors":{"spam":false}}"#, Duration::ZERO).await;

    let verdict = client(&url).submit(&request()).await.unwrap();
    assert!(!verdict.is_violation());

    let headers = seen.headers.lock().unwrap().clone();
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].0, "client-123");
    assert_eq!(headers[0].1, "key-456");
    assert!(headers[0].2.starts_with("application/json"));

    let bodies = seen.bodies.lock().unwrap().clone();
    assert_eq!(bodies[0]["category"], json!("sms"));
    assert_eq!(bodies[0]["content"]["id"], json!("SM1"));
    assert_eq!(bodies[0]["content"]["text"], json!("buy now"));
    assert_eq!(bodies[0]["content"]["attributes"]["region"], json!("Chicago, IL"));
    assert!(bodies[0]["timestamp"].is_string());
}

#[tokio::test]
async fn test_violation_verdict() {
    let (url, _) =
        spawn_webhook(StatusCode::OK, r#"{"behaviors":{"spam":true}}"#, Duration::ZERO).await;

    let verdict = client(&url).moderate(&request()).await.unwrap();
    assert!(verdict.is_violation());
    assert_eq!(verdict.flagged(), vec!["spam"]);
}

#[tokio::test]
async fn test_non_success_status() {
    let (url, _) = spawn_webhook(StatusCode::UNAUTHORIZED, "bad key", Duration::ZERO).await;

    let err = client(&url).submit(&request()).await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad key");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_verdict() {
    let (url, _) = spawn_webhook(StatusCode::OK, r#"{"result":"ok"}"#, Duration::ZERO).await;

    let err = client(&url).moderate(&request()).await.unwrap_err();
    assert!(matches!(err, ModerationError::InvalidVerdict(_)));
}

#[tokio::test]
async fn test_timeout() {
    let (url, _) = spawn_webhook(
        StatusCode::OK,
        r#"{"behaviors":{}}"#,
        Duration::from_millis(500),
    )
    .await;

    let config = ModerationConfig::new(&url, "id", "key").with_timeout(Duration::from_millis(50));
    let err = ModerationClient::new(config)
        .unwrap()
        .moderate(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, ModerationError::Timeout(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}/check", addr))
        .moderate(&request())
        .await
        .unwrap_err();
    assert!(matches!(err, ModerationError::RequestFailed(_)));
}
