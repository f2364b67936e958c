//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the campus
//! assistant server. Routes are organized by functionality:
//!
//! - `health`: Health checks and readiness
//! - `auth`: Session login
//! - `faqs`: FAQ browsing and management
//! - `chat`: The assistant itself
//! - `files`: The shared file repository
//! - `analytics`: Usage analytics
//! - `notifications`: Recent content-change events

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod faqs;
pub mod files;
pub mod health;
pub mod notifications;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Campus Assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/auth/login",
            "/api/faqs",
            "/api/faqs/search",
            "/api/chat",
            "/api/files",
            "/api/analytics",
            "/api/notifications",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
