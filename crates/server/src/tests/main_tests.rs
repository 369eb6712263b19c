use super::*;
use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{header, Request},
    response::Response,
};
use config::Settings;
use mailer::{EmailSender, MailerError, OutgoingEmail, SentEmail};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, MailerError> {
        if self.fail {
            return Err(MailerError::MissingApiKey);
        }
        self.sent.lock().await.push(email.clone());
        Ok(SentEmail {
            id: "re_test".into(),
        })
    }
}

fn state_with(mailer: Arc<dyn EmailSender>) -> AppState {
    AppState {
        settings: Arc::new(Settings::default()),
        translations: Arc::new(Translations::embedded().expect("translations")),
        mailer,
        contact_endpoint: CONTACT_ROUTE.to_string(),
    }
}

fn test_app() -> (Router, Arc<RecordingMailer>) {
    let mailer = Arc::new(RecordingMailer::default());
    (build_router(state_with(mailer.clone())), mailer)
}

fn valid_body() -> Value {
    json!({
        "firstName": "Jean",
        "lastName": "Dupont",
        "email": "jean@ex.com",
        "phone": "(555) 123-4567",
        "message": "Bonjour"
    })
}

fn post_contact(body: impl Into<Body>) -> Request<Body> {
    Request::post(CONTACT_ROUTE)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("request")
}

async fn json_of(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

async fn text_of(response: Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

async fn fetch(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

#[test]
fn log_filter_prefers_rust_log_and_defaults_to_info() {
    assert_eq!(log_filter(None).to_string(), "info");
    assert_eq!(log_filter(Some("server=debug")).to_string(), "server=debug");
}

#[tokio::test]
async fn health_reports_ok_with_a_timestamp() {
    let (app, _mailer) = test_app();
    let response = fetch(app, HEALTH_ROUTE).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_of(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_routes_get_the_french_not_found_body() {
    let (app, _mailer) = test_app();
    let response = fetch(app, "/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_of(response).await, json!({"error": "Route non trouvée"}));
}

#[tokio::test]
async fn preflight_succeeds_with_cors_headers() {
    let (app, _mailer) = test_app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri(CONTACT_ROUTE)
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET,OPTIONS,PATCH,DELETE,POST,PUT"
    );
}

#[tokio::test]
async fn other_methods_are_refused() {
    let (app, mailer) = test_app();
    let response = fetch(app, CONTACT_ROUTE).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(
        json_of(response).await,
        json!({"success": false, "error": "Méthode non autorisée"})
    );
    assert!(mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (app, _mailer) = test_app();
    let response = app.oneshot(post_contact("{not json")).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_of(response).await["error"], "Format JSON invalide");
}

#[tokio::test]
async fn missing_fields_are_listed() {
    let (app, mailer) = test_app();
    let mut body = valid_body();
    body["email"] = json!("   ");
    body["phone"] = json!(5551234567u64);
    let response = app
        .oneshot(post_contact(body.to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_of(response).await;
    assert_eq!(body["error"], "Tous les champs sont requis");
    assert_eq!(body["missing"]["email"], true);
    assert_eq!(body["missing"]["phone"], true);
    assert_eq!(body["missing"]["firstName"], false);
    assert!(mailer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn email_is_checked_before_phone() {
    let (app, _mailer) = test_app();
    let mut body = valid_body();
    body["email"] = json!("jean@ex");
    body["phone"] = json!("123");
    let response = app
        .clone()
        .oneshot(post_contact(body.to_string()))
        .await
        .expect("response");
    assert_eq!(json_of(response).await["error"], "Email invalide");

    let mut body = valid_body();
    body["phone"] = json!("555-123-456");
    let response = app
        .oneshot(post_contact(body.to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_of(response).await["error"], "Numéro de téléphone invalide");
}

#[tokio::test]
async fn valid_submission_sends_one_email() {
    let (app, mailer) = test_app();
    let response = app
        .oneshot(post_contact(valid_body().to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        json_of(response).await,
        json!({"success": true, "message": "Email envoyé avec succès", "data": {"id": "re_test"}})
    );
    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Nouvelle demande de contact - Jean Dupont");
    assert_eq!(sent[0].reply_to, "jean@ex.com");
}

#[tokio::test]
async fn provider_failure_is_a_server_error() {
    let app = build_router(state_with(Arc::new(RecordingMailer {
        fail: true,
        ..RecordingMailer::default()
    })));
    let response = app
        .oneshot(post_contact(valid_body().to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_of(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Erreur serveur");
    assert_eq!(body["details"], "API_KEY_RESEND is not configured");
}

#[tokio::test]
async fn oversized_bodies_are_refused() {
    let (app, _mailer) = test_app();
    let huge = "x".repeat(relay::MAX_CONTACT_BYTES + 1);
    let request = Request::post(CONTACT_ROUTE)
        .header("content-type", "application/json")
        .header("content-length", huge.len())
        .body(Body::from(huge))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        json_of(response).await,
        json!({"success": false, "error": "Requête trop volumineuse"})
    );
}

#[tokio::test]
async fn url_encoded_form_posts_are_relayed() {
    let (app, mailer) = test_app();
    let request = Request::post(CONTACT_ROUTE)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(
            "firstName=Jean&lastName=Dupont&email=jean%40ex.com&phone=5551234567&message=Bonjour",
        ))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(json_of(response).await["data"]["id"], "re_test");
    {
        let sent = mailer.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "jean@ex.com");
    }

    let request = Request::post(CONTACT_ROUTE)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("firstName=Jean&email=jean%40ex.com"))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_of(response).await;
    assert_eq!(body["error"], "Tous les champs sont requis");
    assert_eq!(body["missing"]["lastName"], true);
    assert_eq!(mailer.sent.lock().await.len(), 1);
}

#[tokio::test]
async fn relays_through_a_resend_compatible_provider() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let received = Arc::new(Mutex::new(Vec::<Value>::new()));
    let sink = received.clone();
    let provider = Router::new().route(
        "/emails",
        axum::routing::post(move |Json(payload): Json<Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().await.push(payload);
                Json(json!({"id": "re_live"}))
            }
        }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, provider).await;
    });

    let mailer = ResendMailer::new(format!("http://{addr}"), Some("re_key".into()));
    let app = build_router(state_with(Arc::new(mailer)));
    let response = app
        .oneshot(post_contact(valid_body().to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_of(response).await["data"]["id"], "re_live");

    let received = received.lock().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["from"], "Site Web GNA <noreply@noletandrews.ca>");
    assert!(received[0]["text"]
        .as_str()
        .expect("text body")
        .contains("Prénom: Jean"));
}

#[tokio::test]
async fn landing_pages_render_in_the_cookie_locale() {
    let (app, _mailer) = test_app();
    let response = fetch(app.clone(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text_of(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("lang=\"fr\""));

    let request = Request::get("/grid")
        .header(header::COOKIE, "theme=dark; locale=en")
        .body(Body::empty())
        .expect("request");
    let html = text_of(app.oneshot(request).await.expect("response")).await;
    assert!(html.contains("lang=\"en\""));
    assert!(html.contains("Partners in your growth"));
}

#[tokio::test]
async fn service_pages_open_the_requested_tile_and_section() {
    let (app, _mailer) = test_app();
    let response = fetch(app.clone(), "/services/conseil?section=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text_of(response).await;
    assert!(html.contains("Vision Stratégique"));
    assert!(html.contains("data-index=\"1\""));

    let html = text_of(fetch(app.clone(), "/services/finance?layout=mobile").await).await;
    assert!(html.contains("accordion__item accordion__item--open"));

    let html = text_of(fetch(app, "/services/team?layout=portrait").await).await;
    assert!(html.contains("tile--nav tile--selected"));
}

#[tokio::test]
async fn unknown_items_and_layouts_are_rejected() {
    let (app, _mailer) = test_app();
    assert_eq!(
        fetch(app.clone(), "/services/unknown").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        fetch(app.clone(), "/services/hero").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        fetch(app, "/grid?layout=sideways").await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn locale_switch_sets_the_cookie_and_redirects_home() {
    let (app, _mailer) = test_app();
    let response = fetch(app.clone(), "/locale/en").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .expect("ascii");
    assert!(cookie.starts_with("locale=en; "));
    assert!(cookie.contains("Max-Age=31536000"));

    assert_eq!(fetch(app, "/locale/de").await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rendered_forms_post_to_the_configured_relay() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState {
        contact_endpoint: "https://relay.example/api/contact".into(),
        ..state_with(mailer)
    };
    let html = text_of(fetch(build_router(state), "/services/contact").await).await;
    assert!(html.contains("action=\"https://relay.example/api/contact\""));
}
