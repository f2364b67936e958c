//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (sessions, logging, compression, etc.)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id, session_auth};
use crate::routes::{analytics, auth, chat, faqs, files, health, notifications};
use crate::routes::{api_info, not_found};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{delete, get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Routes are divided into:
/// - Public routes: info, health, login, browsing, chat, downloads
/// - Admin routes: FAQ and file mutation (valid admin session required)
///
/// Middleware stack (applied in reverse order):
/// 1. Request ID tracking
/// 2. Request logging
/// 3. Timeout handling
/// 4. Compression
/// 5. CORS
/// 6. Session authentication (admin routes only)
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/api/auth/login", post(auth::login))
        .route("/api/faqs", get(faqs::list_faqs))
        .route("/api/faqs/search", get(faqs::search_faqs))
        .route("/api/faqs/{id}/helpful", post(faqs::mark_helpful))
        .route("/api/chat", post(chat::chat))
        .route("/api/chat/history", get(chat::chat_history))
        .route("/api/files", get(files::list_files))
        .route("/api/files/search", get(files::search_files))
        .route("/api/files/download/{id}", get(files::download_file))
        .route("/api/analytics", get(analytics::analytics))
        .route("/api/notifications", get(notifications::list_notifications));

    // Admin routes (require an admin session)
    let admin_routes = Router::new()
        .route("/api/faqs", post(faqs::add_faq))
        .route("/api/faqs/{id}", delete(faqs::delete_faq))
        .route("/api/files/upload", post(files::upload_file))
        // Multipart bodies carry boundary overhead beyond the payload cap.
        .layer(DefaultBodyLimit::max(state.config.max_upload_size() + 64 * 1024))
        .route("/api/files/{id}", delete(files::delete_file))
        .layer(from_fn_with_state(state.clone(), session_auth));

    // Combine routes
    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the campus assistant HTTP server
///
/// Initializes logging and shared state from the provided configuration,
/// binds the listener, and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with_target(false)
        .json()
        .init();

    // Create server state
    let state = Arc::new(AppState::new(config.clone())?);

    // Build router
    let app = build_router(state.clone());

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting campus assistant on {} with {} faqs and {} accounts",
        addr,
        state.store().len(),
        config.users.len()
    );
    tracing::info!(
        "Timeout: {}s, Max upload: {}MB, CORS: {}",
        config.timeout_secs,
        config.max_upload_mb,
        config.enable_cors
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
