mod catalog;
mod config;
mod errors;
mod extractor;
mod formatter;
mod handlers;
mod language;
mod matcher;
mod models;
mod translator;
mod webhook_handler;
mod webhook_models;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::SchemeCatalog;
use crate::config::Config;
use crate::translator::SarvamClient;

/// Main entry point for the application.
///
/// Initializes logging, configuration, the scheme catalog and the
/// translation client, then starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheme_bot_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Load the scheme catalog once; it is read-only for the process lifetime
    let catalog = match config.schemes_path.as_deref() {
        Some(path) => SchemeCatalog::from_path(path)?,
        None => SchemeCatalog::embedded()?,
    };
    tracing::info!("Scheme catalog loaded: {} schemes", catalog.len());

    // Initialize translation client
    let translator = SarvamClient::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize Sarvam client: {}", e))?;
    tracing::info!("Sarvam translation client initialized");

    // Build application state
    let app_state = Arc::new(handlers::AppState {
        catalog: Arc::new(catalog),
        translator: Arc::new(translator),
    });

    // Configure rate limiter: 10 requests/second per IP, burst of 20
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .unwrap(),
    );

    // Build protected routes with security layers
    let protected_routes = Router::new()
        // WhatsApp webhook endpoint (Twilio form posts)
        .route(
            "/api/v1/webhooks/whatsapp",
            post(webhook_handler::whatsapp_webhook),
        )
        // Catalog read endpoints
        .route("/api/v1/schemes", get(handlers::list_schemes))
        .route("/api/v1/schemes/:id", get(handlers::get_scheme))
        .layer(
            ServiceBuilder::new()
                // Request size limit: webhook posts are small form payloads
                .layer(RequestBodyLimitLayer::new(64 * 1024))
                // Rate limiting: 10 req/sec per IP, burst of 20
                .layer(GovernorLayer {
                    config: governor_conf,
                }),
        );

    // Build final app with health check (bypasses rate limiting)
    let app = Router::new()
        .route("/health", get(handlers::health))
        .merge(protected_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
