use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::handlers::{health, items};

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/{id}", get(items::get_item))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}
