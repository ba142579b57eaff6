//! Route modules for the Fingerspell server

pub mod alphabet;
pub mod health;
pub mod transcribe;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::fingerspell::PUBLIC_IMAGE_PREFIX;
use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public image paths emitted by the mapper resolve here
    let images = ServeDir::new(state.asset_root());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::health_check))
        .nest("/api/transcribe", transcribe::router())
        .nest("/api/alphabet", alphabet::router())
        .nest_service(PUBLIC_IMAGE_PREFIX, images)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
