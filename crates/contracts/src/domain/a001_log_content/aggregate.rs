use serde::{Deserialize, Serialize};

/// Тела запроса и ответа, записанные для одной записи лога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogContentDto {
    pub log_id: i64,
    pub request_body: String,
    pub response_body: String,
}

/// DTO для сохранения содержимого лога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogContentRequest {
    pub log_id: i64,
    #[serde(default)]
    pub request_body: String,
    #[serde(default)]
    pub response_body: String,
}

/// Удаление содержимого, записанного раньше `target_timestamp` (unix, секунды)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupLogContentRequest {
    pub target_timestamp: i64,
    pub limit: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupLogContentResponse {
    pub deleted: u64,
}
