pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::layout::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages API
        .route("/api/v1/pages", post(handlers::handle_paginate))
        .route("/api/v1/pages/outline", post(handlers::handle_outline))
        .fallback(not_found)
        .with_state(state)
}
