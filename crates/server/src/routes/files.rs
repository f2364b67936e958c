use crate::error::{ServerError, ServerResult};
use crate::state::{AppState, NotificationKind, StoredFile};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub files: Vec<StoredFile>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<StoredFile>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file: StoredFile,
}

/// List the file repository.
pub async fn list_files(State(state): State<Arc<AppState>>) -> ServerResult<impl IntoResponse> {
    Ok(Json(FileListResponse {
        files: state.files().clone(),
    }))
}

/// Filename substring search.
pub async fn search_files(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> ServerResult<impl IntoResponse> {
    let needle = query.q.to_lowercase();
    let results = state
        .files()
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    Ok(Json(SearchResponse { results }))
}

/// Upload a file (admin only, multipart).
///
/// Expects a `file` part plus optional `category` and `uploadedBy` text
/// parts. The payload is stored under the uploads directory as
/// `<millis>-<original-name>` so repeated uploads of the same name never
/// collide.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let bad_body =
        |e: axum::extract::multipart::MultipartError| ServerError::BadRequest(format!("Malformed upload: {e}"));

    let mut payload: Option<(String, Vec<u8>)> = None;
    let mut category = "General".to_string();
    let mut uploaded_by = "Admin".to_string();

    while let Some(field) = multipart.next_field().await.map_err(bad_body)? {
        // Owned copy: consuming the field below invalidates borrowed names.
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref() {
            Some("file") => {
                let name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "upload.bin".to_string());
                let bytes = field.bytes().await.map_err(bad_body)?;
                payload = Some((name, bytes.to_vec()));
            }
            Some("category") => category = field.text().await.map_err(bad_body)?,
            Some("uploadedBy") => uploaded_by = field.text().await.map_err(bad_body)?,
            _ => {}
        }
    }

    let (name, bytes) = payload.ok_or_else(|| ServerError::BadRequest("No file uploaded".into()))?;
    if bytes.len() > state.config.max_upload_size() {
        return Err(ServerError::PayloadTooLarge(state.config.max_upload_mb));
    }

    // Path separators in a client-supplied name must not escape the
    // uploads directory.
    let safe_name = name.replace(['/', '\\'], "_");
    let stored_name = format!("{}-{}", Utc::now().timestamp_millis(), safe_name);
    let size = format!("{:.2} MB", bytes.len() as f64 / (1024.0 * 1024.0));

    tokio::fs::write(state.config.uploads_dir.join(&stored_name), &bytes).await?;

    let record = {
        let mut files = state.files_mut();
        let id = files.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let record = StoredFile {
            id,
            name,
            category,
            uploaded_by,
            uploaded_at: Utc::now().to_rfc3339(),
            size,
            download_count: 0,
            path: stored_name,
        };
        files.push(record.clone());
        record
    };

    state.notify(
        format!("New file uploaded: {}", record.name),
        NotificationKind::Success,
    );
    tracing::info!(id = record.id, name = %record.name, "file uploaded");

    Ok(Json(UploadResponse {
        success: true,
        file: record,
    }))
}

/// Download a file, counting the download.
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ServerResult<impl IntoResponse> {
    let (name, stored_name) = {
        let files = state.files();
        let file = files.iter().find(|f| f.id == id).ok_or(ServerError::NotFound)?;
        (file.name.clone(), file.path.clone())
    };

    let bytes = match tokio::fs::read(state.config.uploads_dir.join(&stored_name)).await {
        Ok(bytes) => bytes,
        // Record without bytes on disk: treat like a missing file.
        Err(_) => return Err(ServerError::NotFound),
    };

    if let Some(file) = state.files_mut().iter_mut().find(|f| f.id == id) {
        file.download_count += 1;
    }

    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{name}\""),
            ),
        ],
        bytes,
    ))
}

/// Delete a file (admin only): registry entry and stored bytes.
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> ServerResult<impl IntoResponse> {
    let removed = {
        let mut files = state.files_mut();
        let position = files
            .iter()
            .position(|f| f.id == id)
            .ok_or(ServerError::NotFound)?;
        files.remove(position)
    };

    if let Err(error) = tokio::fs::remove_file(state.config.uploads_dir.join(&removed.path)).await {
        tracing::warn!(%error, path = %removed.path, "failed to remove stored file");
    }

    state.notify(
        format!("File deleted: {}", removed.name),
        NotificationKind::Info,
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "File deleted successfully",
    })))
}
