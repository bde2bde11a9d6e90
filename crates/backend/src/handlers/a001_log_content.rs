use axum::{extract::Path, Json};
use contracts::domain::a001_log_content::{
    CleanupLogContentRequest, CleanupLogContentResponse, CreateLogContentRequest, LogContentDto,
};
use contracts::shared::api_response::ApiResponse;

use crate::domain::a001_log_content::service::{self, LogContentError};
use crate::shared::config;
use crate::shared::data::db::get_connection;

/// Logical failures travel in the envelope with HTTP 200; the viewer reads
/// `success`/`message` rather than the status code.
fn into_response<T>(result: Result<T, LogContentError>) -> Json<ApiResponse<T>> {
    match result {
        Ok(data) => Json(ApiResponse::ok(data)),
        Err(e) => Json(ApiResponse::fail(e.to_string())),
    }
}

/// GET /api/log/content/:id
pub async fn get_by_log_id(Path(log_id): Path<i64>) -> Json<ApiResponse<LogContentDto>> {
    let result = service::get_by_log_id(get_connection(), log_id).await;
    if let Err(e) = &result {
        tracing::debug!("log content {} unavailable: {}", log_id, e);
    }
    into_response(result)
}

/// POST /api/log/content
pub async fn create(Json(req): Json<CreateLogContentRequest>) -> Json<ApiResponse<()>> {
    let enabled = config::current().log_content.enabled;
    match service::create(get_connection(), enabled, &req).await {
        Ok(service::CreateOutcome::Stored) => Json(ApiResponse::done()),
        Ok(service::CreateOutcome::Disabled) => Json(ApiResponse {
            success: true,
            data: None,
            message: Some("log content recording is disabled".to_string()),
        }),
        Err(e) => Json(ApiResponse::fail(e.to_string())),
    }
}

/// DELETE /api/log/content/:id
pub async fn delete(Path(log_id): Path<i64>) -> Json<ApiResponse<()>> {
    into_response(
        service::delete_by_log_id(get_connection(), log_id)
            .await
            .map(|_| ()),
    )
}

/// POST /api/log/content/cleanup
pub async fn cleanup(
    Json(req): Json<CleanupLogContentRequest>,
) -> Json<ApiResponse<CleanupLogContentResponse>> {
    into_response(
        service::delete_older_than(get_connection(), req.target_timestamp, req.limit)
            .await
            .map(|deleted| CleanupLogContentResponse { deleted }),
    )
}
