use std::{net::SocketAddr, sync::Arc};

use axum::{
    http::StatusCode,
    middleware,
    routing::{any, get},
    Json, Router,
};
use chrono::Utc;
use content::Translations;
use shared::protocol::{ErrorBody, HealthResponse, CONTACT_ROUTE, HEALTH_ROUTE};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod email_template;
mod mailer;
mod pages;
mod relay;

use app_state::AppState;
use config::load_settings;
use mailer::ResendMailer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    let settings = load_settings();
    let contact_endpoint = settings.contact_form_endpoint()?;
    let translations = Translations::embedded()?;
    if settings.resend_api_key.is_none() {
        warn!("API_KEY_RESEND is not set; contact submissions will fail");
    }
    let mailer = ResendMailer::new(
        settings.resend_api_url.clone(),
        settings.resend_api_key.clone(),
    );

    let addr: SocketAddr = settings.server_bind.parse()?;
    let state = AppState {
        settings: Arc::new(settings),
        translations: Arc::new(translations),
        mailer: Arc::new(mailer),
        contact_endpoint,
    };
    let app = build_router(state);

    info!(%addr, "server listening");
    info!(route = CONTACT_ROUTE, "contact relay available");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// `RUST_LOG` directives when set and valid, `info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            CONTACT_ROUTE,
            any(relay::contact)
                .layer(RequestBodyLimitLayer::new(relay::MAX_CONTACT_BYTES))
                .layer(middleware::map_response(relay::finish_response)),
        )
        .route(HEALTH_ROUTE, get(health))
        .route("/", get(pages::intro))
        .route("/grid", get(pages::grid))
        .route("/services/:id", get(pages::item))
        .route("/locale/:code", get(pages::switch_locale))
        .fallback(fallback)
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        timestamp: Utc::now(),
    })
}

async fn fallback() -> (StatusCode, Json<ErrorBody>) {
    pages::not_found()
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
