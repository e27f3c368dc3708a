//! # Passkey Ceremony Demo
//!
//! A single page with two buttons. "Register" runs a WebAuthn registration
//! ceremony against the platform authenticator and remembers the resulting
//! credential id; "Sign In" runs an assertion ceremony restricted to that id.
//! Every outcome ends in an alert.
//!
//! ## Key Concepts
//! - **Ceremony**: one challenge-response exchange with an authenticator
//! - **Credential id**: the only state kept, base64 in local key-value storage
//! - No server-side verification happens; the signed data is only logged

mod config;   // Configuration management (environment variables, settings)
mod db;       // Local key-value storage
mod error;    // Error handling and custom error types
mod handlers; // HTTP request handlers (routes)
mod state;    // Shared application state
mod webauthn; // Ceremonies, request building, platform seams

use crate::config::Config;
use crate::state::AppState;
use crate::webauthn::capability::BLUETOOTH_UNAVAILABLE;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for this one.
    // Can be overridden with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,passkey_ceremony_demo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = AppState::new(&config).await?;
    tracing::info!("Application state initialized");

    // One-shot capability probe; advisory only, never blocks startup
    let probe = app_state.probe.clone();
    tokio::spawn(async move {
        if !probe.is_available().await {
            tracing::warn!("{}", BLUETOOTH_UNAVAILABLE);
        }
    });

    // The page is served from the same origin; CORS only matters when the
    // page is opened from elsewhere during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = handlers::router(app_state)
        .fallback_service(ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
