use crate::error::ServerResult;
use crate::state::{AppState, Notification};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

const RECENT_LIMIT: usize = 10;

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

/// The most recent notifications, newest first.
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(NotificationsResponse {
        notifications: state.recent_notifications(RECENT_LIMIT),
    }))
}
