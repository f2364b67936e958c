use crate::error::ServerResult;
use crate::state::{AppState, NotificationKind};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use faq::{Category, FaqRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct FaqListResponse {
    pub faqs: Vec<FaqRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<FaqRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
    /// Omitted category lands in General, matching the admin panel form.
    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct CreateFaqResponse {
    pub success: bool,
    pub faq: FaqRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpfulResponse {
    pub success: bool,
    pub helpful_count: u32,
}

/// List every FAQ record.
pub async fn list_faqs(State(state): State<Arc<AppState>>) -> ServerResult<impl IntoResponse> {
    Ok(Json(FaqListResponse {
        faqs: state.store().list(),
    }))
}

/// Substring search over question and answer text.
pub async fn search_faqs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(SearchResponse {
        results: state.store().search(&query.q),
    }))
}

/// Add a FAQ (admin only).
pub async fn add_faq(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateFaqRequest>,
) -> ServerResult<impl IntoResponse> {
    let record = state
        .store_mut()
        .add(request.question, request.answer, request.category)?;

    state.notify(
        format!("New FAQ added: {}", record.question),
        NotificationKind::Info,
    );

    Ok(Json(CreateFaqResponse {
        success: true,
        faq: record,
    }))
}

/// Mark a FAQ as helpful.
pub async fn mark_helpful(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ServerResult<impl IntoResponse> {
    let helpful_count = state.store_mut().mark_helpful(id)?;
    Ok(Json(HelpfulResponse {
        success: true,
        helpful_count,
    }))
}

/// Delete a FAQ (admin only).
pub async fn delete_faq(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ServerResult<impl IntoResponse> {
    let removed = state.store_mut().delete(id)?;

    state.notify(
        format!("FAQ deleted: {}", removed.question),
        NotificationKind::Info,
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "FAQ deleted successfully",
    })))
}
