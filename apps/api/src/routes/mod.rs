pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::dataset::handlers as dataset;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        // CSV uploads
        .route("/upload", post(dataset::handle_upload))
        .route("/analyze", post(analysis::handle_analyze))
        .route("/recommend", post(analysis::handle_recommend))
        .route("/match", post(analysis::handle_match))
        // Raw-text screening
        .route("/match/semantic", post(screening::handle_semantic_match))
        .route("/skills", post(screening::handle_skills))
        .route("/ats", post(screening::handle_ats))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
