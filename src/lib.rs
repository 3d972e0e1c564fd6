pub mod auth;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::{Mailer, SmtpMailer};
use crate::middleware::auth_redirect::redirect_unauthorized;
use crate::state::{AppState, SharedState};

/// Build the SMTP mailer from config. `None` when SMTP is not configured or
/// the relay cannot be set up; notifications are then only logged.
pub fn system_mailer(config: &Config) -> Option<Arc<dyn Mailer>> {
    let smtp = config.smtp.as_ref()?;
    match SmtpMailer::new(smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP configured");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::warn!("SMTP not available: {e}");
            None
        }
    }
}

pub fn build_app(pool: SqlitePool, config: Config, mailer: Option<Arc<dyn Mailer>>) -> Router {
    let state: SharedState = Arc::new(AppState::new(pool, config, mailer));

    let security_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    Router::new()
        .merge(views::view_routes().layer(axum::middleware::from_fn(redirect_unauthorized)))
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(security_headers)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
