use super::handlers;
use crate::application::engine::ReceiptEngine;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the axum router with both receipt endpoints.
pub fn build_router(engine: Arc<ReceiptEngine>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        // Receipts may carry any number of items
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}
