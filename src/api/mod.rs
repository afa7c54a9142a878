pub mod error;
pub mod feedback;
pub mod filters;
pub mod health;
pub mod ingest;
pub mod pages;
pub mod response;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::database::Database;
use crate::services::{ActivityConverter, IngestService};

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub converter: Arc<ActivityConverter>,
    pub ingest: Arc<IngestService>,
}

/// 组装全部路由
pub fn router(state: AppState) -> Router {
    Router::new()
        // Home page
        .route("/", get(pages::home))
        // Search
        .route("/search", get(search::search_activities))
        // Dropdown sources
        .route("/get_unique_values/:column", get(filters::get_unique_values))
        .route("/get_levels", get(filters::get_levels))
        .route("/get_channels", get(filters::get_channels))
        // Feedback
        .route("/submit-feedback", post(feedback::submit_feedback))
        // Health and stats
        .route("/api/health", get(health::health_check))
        .route("/api/stats", get(health::get_stats))
        // Channel ingest
        .route("/api/ingest/:handle", post(ingest::sync_channel))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
