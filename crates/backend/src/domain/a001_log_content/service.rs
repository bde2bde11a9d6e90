use chrono::Utc;
use contracts::domain::a001_log_content::{CreateLogContentRequest, LogContentDto};
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

use super::repository;
use crate::shared::data::db::ensure_schema;

#[derive(Debug, Error)]
pub enum LogContentError {
    #[error("log content not found")]
    NotFound,
    #[error("{0}")]
    Database(#[from] DbErr),
}

/// Результат записи содержимого
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Stored,
    /// Recording is switched off, nothing written
    Disabled,
}

/// Сохранить тела запроса и ответа для записи лога
///
/// If the table is missing (fresh or truncated log database) it is
/// created and the insert retried once.
pub async fn create(
    db: &DatabaseConnection,
    enabled: bool,
    request: &CreateLogContentRequest,
) -> Result<CreateOutcome, LogContentError> {
    if !enabled {
        return Ok(CreateOutcome::Disabled);
    }

    let now = Utc::now().timestamp();
    let insert = || {
        repository::insert(
            db,
            request.log_id,
            &request.request_body,
            &request.response_body,
            now,
        )
    };

    let mut result = insert().await;
    if let Err(e) = &result {
        if is_missing_table(e) {
            tracing::info!("log_contents table not found, attempting to create it");
            if let Err(migration_error) = ensure_schema(db).await {
                tracing::error!("failed to create log_contents table: {}", migration_error);
                return Err(migration_error.into());
            }
            result = insert().await;
        }
    }

    match result {
        Ok(()) => Ok(CreateOutcome::Stored),
        Err(e) => {
            tracing::error!("failed to create log content for {}: {}", request.log_id, e);
            Err(e.into())
        }
    }
}

fn is_missing_table(error: &DbErr) -> bool {
    let text = error.to_string();
    text.contains("no such table") || text.contains("doesn't exist")
}

pub async fn get_by_log_id(
    db: &DatabaseConnection,
    log_id: i64,
) -> Result<LogContentDto, LogContentError> {
    repository::find_by_log_id(db, log_id)
        .await?
        .map(Into::into)
        .ok_or(LogContentError::NotFound)
}

/// Удалить содержимое одной записи; отсутствие записи не ошибка
pub async fn delete_by_log_id(db: &DatabaseConnection, log_id: i64) -> Result<u64, LogContentError> {
    Ok(repository::delete_by_log_id(db, log_id).await?)
}

/// Удалить не более `limit` записей старше `target_timestamp`
pub async fn delete_older_than(
    db: &DatabaseConnection,
    target_timestamp: i64,
    limit: u64,
) -> Result<u64, LogContentError> {
    let ids = repository::find_ids_older_than(db, target_timestamp, limit).await?;
    if ids.is_empty() {
        return Ok(0);
    }
    let deleted = repository::delete_by_log_ids(db, &ids).await?;
    tracing::info!("Deleted {} log content records older than {}", deleted, target_timestamp);
    Ok(deleted)
}
