use std::sync::Arc;

use super::*;
use axum::{
    http::{HeaderMap, StatusCode as AxumStatus},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

fn email() -> OutgoingEmail {
    OutgoingEmail {
        from: "Site Web GNA <noreply@noletandrews.ca>".into(),
        to: vec!["info@noletandrews.ca".into()],
        reply_to: "jean@ex.com".into(),
        subject: "Nouvelle demande de contact - Jean Dupont".into(),
        html: "<p>Bonjour</p>".into(),
        text: "Bonjour".into(),
    }
}

type Captured = (Option<String>, Value);

async fn spawn_provider(
    status: AxumStatus,
    body: Value,
) -> Result<(String, oneshot::Receiver<Captured>), std::io::Error> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let app = Router::new().route(
        "/emails",
        post(move |headers: HeaderMap, Json(payload): Json<Value>| {
            let tx = tx.clone();
            let body = body.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string);
                if let Some(tx) = tx.lock().await.take() {
                    let _ = tx.send((auth, payload));
                }
                (status, Json(body))
            }
        }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), rx))
}

#[tokio::test]
async fn sends_with_bearer_key_and_returns_the_id() {
    let (base, captured) = spawn_provider(AxumStatus::OK, json!({"id": "re_123"}))
        .await
        .expect("spawn provider");
    let mailer = ResendMailer::new(base, Some("re_key".into()));
    let sent = mailer.send(&email()).await.expect("sent");
    assert_eq!(sent.id, "re_123");

    let (auth, payload) = captured.await.expect("captured");
    assert_eq!(auth.as_deref(), Some("Bearer re_key"));
    assert_eq!(payload["reply_to"], "jean@ex.com");
    assert_eq!(payload["to"][0], "info@noletandrews.ca");
    assert_eq!(payload["subject"], "Nouvelle demande de contact - Jean Dupont");
}

#[tokio::test]
async fn provider_rejection_is_reported_without_the_payload() {
    let (base, _captured) = spawn_provider(
        AxumStatus::UNPROCESSABLE_ENTITY,
        json!({"name": "validation_error", "message": "secret detail"}),
    )
    .await
    .expect("spawn provider");
    let mailer = ResendMailer::new(format!("{base}/"), Some("re_key".into()));
    let err = mailer.send(&email()).await.expect_err("rejected");
    assert!(matches!(err, MailerError::Rejected { status } if status.as_u16() == 422));
    assert!(!err.to_string().contains("secret detail"));
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let mailer = ResendMailer::new("http://127.0.0.1:9", None);
    let err = mailer.send(&email()).await.expect_err("no key");
    assert!(matches!(err, MailerError::MissingApiKey));
}

#[test]
fn emails_url_ignores_a_trailing_slash() {
    let mailer = ResendMailer::new("https://api.resend.com/", None);
    assert_eq!(mailer.emails_url(), "https://api.resend.com/emails");
}
