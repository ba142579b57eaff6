//! Alphabet inventory routes

use axum::{extract::State, routing::get, Json, Router};

use crate::error::{AppError, Result};
use crate::fingerspell::{alphabet_inventory, AlphabetResponse};
use crate::state::AppState;

/// Create the alphabet router
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_alphabet))
}

/// Report which letters have an image
async fn list_alphabet(State(state): State<AppState>) -> Result<Json<AlphabetResponse>> {
    let assets = state.assets().clone();
    let root = state.asset_root().to_path_buf();

    let result = tokio::task::spawn_blocking(move || alphabet_inventory(&root, assets.as_ref()))
        .await
        .map_err(|e| AppError::Internal(format!("Alphabet task failed: {}", e)))??;

    Ok(Json(AlphabetResponse { result }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::LocalAssets;
    use crate::config::Config;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_alphabet() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("c_test.jpg"), b"jpeg").unwrap();

        let mut config = Config::default();
        config.assets.root = temp_dir.path().to_path_buf();

        let app = Router::new()
            .nest("/api/alphabet", router())
            .with_state(AppState::new(config, Arc::new(LocalAssets::new())));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/alphabet").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: AlphabetResponse = response.json();
        assert_eq!(body.result.len(), 26);

        let available: Vec<char> = body
            .result
            .iter()
            .filter(|entry| entry.available)
            .map(|entry| entry.letter)
            .collect();
        assert_eq!(available, vec!['c']);
        assert_eq!(
            body.result[2].image_path.as_deref(),
            Some("/images/asl_alphabet/c_test.jpg")
        );
    }
}
