use crate::error::{ServerError, ServerResult};
use crate::state::{AppState, SessionUser};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Bearer token for subsequent requests.
    pub token: String,
    pub user: SessionUser,
}

/// Validate credentials and open a session.
///
/// Returns the session token alongside the user profile (never the
/// password). Bad credentials are a 401 with the standard error envelope.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<impl IntoResponse> {
    match state.login(&request.email, &request.password) {
        Some((token, user)) => {
            tracing::info!(email = %user.email, role = ?user.role, "login succeeded");
            Ok(Json(LoginResponse {
                success: true,
                token,
                user,
            }))
        }
        None => Err(ServerError::Authentication("Invalid credentials".into())),
    }
}
