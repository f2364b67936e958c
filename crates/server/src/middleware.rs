use crate::config::Role;
use crate::error::ServerError;
use crate::state::AppState;
use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

/// Pulls the session token out of a header map, from either the
/// `X-Auth-Token` header or `Authorization: Bearer <token>`.
pub fn extract_token_from(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get("x-auth-token")
        .or_else(|| headers.get(AUTHORIZATION))
        .and_then(|v| v.to_str().ok())
        .map(|s| s.strip_prefix("Bearer ").unwrap_or(s).to_string())
}

/// Admin session middleware for the content-management routes.
///
/// The resolved [`crate::state::SessionUser`] is inserted into request
/// extensions for handlers that want to know who acted.
pub async fn session_auth(
    state: axum::extract::State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let token = extract_token_from(request.headers()).ok_or_else(|| {
        ServerError::Authentication(
            "Session token required. Provide it in 'X-Auth-Token' or 'Authorization: Bearer <token>' header"
                .to_string(),
        )
    })?;

    let user = state
        .session(&token)
        .ok_or_else(|| ServerError::Authentication("Invalid or expired session".to_string()))?;

    if user.role != Role::Admin {
        return Err(ServerError::Forbidden(
            "Admin role required for this operation".to_string(),
        ));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Request ID injection middleware
pub async fn request_id(mut request: Request, next: Next) -> Response {
    // Generate or extract request ID
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    // Add to request extensions for handlers to access
    request.extensions_mut().insert(request_id.clone());

    // Process request
    let mut response = next.run(request).await;

    // Add request ID to response headers
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}

/// Logging middleware
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let request_id = request
        .extensions()
        .get::<String>()
        .cloned()
        .unwrap_or_default();

    tracing::info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        "Request started"
    );

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}
