use crate::error::ServerResult;
use crate::state::{AppState, StoredFile};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use faq::{Category, FaqRecord};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

const TOP_N: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Most-asked FAQs, descending.
    pub top_faqs: Vec<FaqRecord>,
    /// Most-downloaded files, descending.
    pub top_files: Vec<StoredFile>,
    /// FAQ count per category.
    pub category_stats: HashMap<Category, usize>,
    pub total_faqs: usize,
    pub total_files: usize,
    /// Sum of asked-counts over the whole collection.
    pub total_questions: u64,
}

/// Usage analytics computed on demand from live state.
pub async fn analytics(State(state): State<Arc<AppState>>) -> ServerResult<impl IntoResponse> {
    let faqs = state.store().list();

    let mut top_faqs = faqs.clone();
    top_faqs.sort_by(|a, b| b.asked_count.cmp(&a.asked_count));
    top_faqs.truncate(TOP_N);

    let files = state.files().clone();
    let mut top_files = files.clone();
    top_files.sort_by(|a, b| b.download_count.cmp(&a.download_count));
    top_files.truncate(TOP_N);

    let mut category_stats: HashMap<Category, usize> = HashMap::new();
    for faq in &faqs {
        *category_stats.entry(faq.category).or_insert(0) += 1;
    }

    let total_questions = faqs.iter().map(|f| u64::from(f.asked_count)).sum();

    Ok(Json(AnalyticsResponse {
        top_faqs,
        top_files,
        category_stats,
        total_faqs: faqs.len(),
        total_files: files.len(),
        total_questions,
    }))
}
