use contracts::domain::a001_log_content::LoadFailure;
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::api_url;

/// GET /api/log/content/:id
///
/// Everything short of a decoded envelope (network error, non-2xx status,
/// undecodable body) is a transport failure. The envelope itself is
/// returned as is; `success: false` is judged by the caller.
pub async fn fetch_log_content(log_id: i64) -> Result<ApiResponse<Value>, LoadFailure> {
    let response = Request::get(&api_url(&format!("/api/log/content/{}", log_id)))
        .send()
        .await
        .map_err(|e| LoadFailure::transport(e.to_string()))?;

    if !response.ok() {
        return Err(LoadFailure::transport(format!(
            "Request failed with status code {}",
            response.status()
        )));
    }

    response
        .json::<ApiResponse<Value>>()
        .await
        .map_err(|e| LoadFailure::transport(e.to_string()))
}
