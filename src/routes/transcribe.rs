//! Transcribe API routes
//!
//! Turns a text into the sequence of alphabet images the front end plays back.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::fingerspell::{map_text, TranscribeResponse};
use crate::state::AppState;

/// Create the transcribe router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(transcribe))
}

/// Transcribe request body
#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Map text to alphabet images
async fn transcribe(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TranscribeRequest>, JsonRejection>,
) -> Result<Json<TranscribeResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let text = request
        .text
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::BadRequest("Text is required".to_string()))?;

    let length = text.chars().count();
    let limit = state.config().transcribe.max_text_length;
    if length > limit {
        return Err(AppError::BadRequest(format!(
            "Text is too long: {} characters (limit {})",
            length, limit
        )));
    }

    tracing::debug!(chars = length, "Processing text");

    let assets = state.assets().clone();
    let root = state.asset_root().to_path_buf();

    // Lookups hit the filesystem
    let result = tokio::task::spawn_blocking(move || map_text(&text, &root, assets.as_ref()))
        .await
        .map_err(|e| AppError::Internal(format!("Transcribe task failed: {}", e)))??;

    tracing::debug!(annotations = result.len(), "Processed text");

    Ok(Json(TranscribeResponse { result }))
}
