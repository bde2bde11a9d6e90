use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement,
};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_LOG_CONTENTS_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS log_contents (
        log_id INTEGER PRIMARY KEY NOT NULL,
        request_body TEXT NOT NULL DEFAULT '',
        response_body TEXT NOT NULL DEFAULT '',
        created_at INTEGER NOT NULL
    );
"#;

const CREATE_LOG_CONTENTS_INDEX_SQL: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_log_contents_created_at
    ON log_contents (created_at);
"#;

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

/// Create log_contents and its index when missing
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    for sql in [CREATE_LOG_CONTENTS_SQL, CREATE_LOG_CONTENTS_INDEX_SQL] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// In-memory SQLite on a single pooled connection, without schema
#[cfg(test)]
pub async fn memory_connection() -> DatabaseConnection {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options)
        .await
        .expect("in-memory sqlite should open")
}
