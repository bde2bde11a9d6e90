use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // LOG CONTENT
        // ========================================
        .route(
            "/api/log/content",
            post(handlers::a001_log_content::create),
        )
        .route(
            "/api/log/content/cleanup",
            post(handlers::a001_log_content::cleanup),
        )
        .route(
            "/api/log/content/:id",
            get(handlers::a001_log_content::get_by_log_id)
                .delete(handlers::a001_log_content::delete),
        )
}
