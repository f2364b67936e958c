use crate::error::ServerResult;
use crate::middleware::extract_token_from;
use crate::state::{AppState, ChatRole, ChatTurn};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Replies shown when an unauthenticated client asks the assistant a
/// question. Equally weighted; the state's picker chooses one.
pub const LOGIN_PROMPTS: &[&str] = &[
    "🔐 Please login first to use the chat assistant! Click the login button in the top-right corner.",
    "⚠️ You need to be logged in to ask questions. Please login to continue.",
    "🚫 Access denied! Please login first to chat with the assistant.",
    "👤 Authentication required! Please login to ask questions.",
    "🔒 This feature requires login. Please login to access the chat assistant.",
];

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(rename = "type")]
    pub role: ChatRole,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatTurn>,
}

/// Ask the assistant a question.
///
/// Unauthenticated callers get a login prompt as a normal bot reply (HTTP
/// 200), mirroring how the chat UI treats it as just another message.
/// Authenticated callers run the matcher against the live FAQ set; the
/// exchange is appended to the bounded transcript.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<ChatRequest>,
) -> ServerResult<impl IntoResponse> {
    let user = extract_token_from(&headers).and_then(|token| state.session(&token));

    let Some(user) = user else {
        let message = state
            .picker
            .choose(LOGIN_PROMPTS)
            .unwrap_or(LOGIN_PROMPTS[0]);
        return Ok(Json(ChatResponse {
            role: ChatRole::Bot,
            message: message.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }));
    };

    let reply = state.store_mut().respond(&state.matcher, &request.message);
    let timestamp = Utc::now().to_rfc3339();

    state.record_chat(
        ChatTurn {
            role: ChatRole::User,
            message: request.message,
            user: Some(user.name),
            timestamp: timestamp.clone(),
        },
        ChatTurn {
            role: ChatRole::Bot,
            message: reply.answer.clone(),
            user: None,
            timestamp: timestamp.clone(),
        },
    );

    Ok(Json(ChatResponse {
        role: ChatRole::Bot,
        message: reply.answer,
        timestamp,
    }))
}

/// Recent chat transcript, oldest first.
pub async fn chat_history(State(state): State<Arc<AppState>>) -> ServerResult<impl IntoResponse> {
    Ok(Json(ChatHistoryResponse {
        messages: state.chat_log(),
    }))
}
