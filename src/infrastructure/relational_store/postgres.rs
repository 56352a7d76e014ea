use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::{ports::BoardStore, Board, Comment, DomainError};
use crate::infrastructure::config::PostgresConfig;

pub struct PostgresBoardStore {
    pool: PgPool,
    comments_sql: String,
}

const BOARD_SQL: &str = "SELECT to_jsonb(b) FROM boards b WHERE b.board_id::text = $1 LIMIT 1";

impl PostgresBoardStore {
    /// Opens the pool with driver defaults. Fails if no connection can be
    /// established.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .connect(&config.database_url)
            .await
            .map_err(|e| DomainError::unavailable(format!("Postgres connect failed: {}", e)))?;

        let store = Self::with_pool(pool, &config.rich_content_join_key)?;
        tracing::info!(join_key = %config.rich_content_join_key, "Postgres pool initialized");
        Ok(store)
    }

    pub fn with_pool(pool: PgPool, join_key: &str) -> Result<Self, DomainError> {
        Ok(Self {
            pool,
            comments_sql: comments_sql(join_key)?,
        })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Comments left-joined with their rich content on `join_key`. On a column
/// name clash the comment's value is kept, as in a natural left join.
fn comments_sql(join_key: &str) -> Result<String, DomainError> {
    validate_identifier(join_key, "RICH_CONTENT_JOIN_KEY")?;
    Ok(format!(
        "SELECT COALESCE(to_jsonb(r), '{{}}'::jsonb) || to_jsonb(c) \
         FROM comments c \
         LEFT JOIN rich_content r ON r.{key} = c.{key} \
         WHERE c.board_id::text = $1",
        key = join_key
    ))
}

/// Identifiers are spliced into SQL, so only `[A-Za-z0-9_]` is accepted.
pub fn validate_identifier(value: &str, field_name: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::config(format!("{} must not be empty", field_name)));
    }

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    if !valid {
        return Err(DomainError::config(format!(
            "{} may only contain ASCII letters, digits and underscores: {}",
            field_name, value
        )));
    }

    Ok(())
}

fn into_columns(row: Value) -> Result<serde_json::Map<String, Value>, DomainError> {
    match row {
        Value::Object(columns) => Ok(columns),
        other => Err(DomainError::internal(format!(
            "row rendered as non-object: {}",
            other
        ))),
    }
}

#[async_trait]
impl BoardStore for PostgresBoardStore {
    async fn comments_for_board(
        &self,
        board_id: Option<&str>,
    ) -> Result<Vec<Comment>, DomainError> {
        let rows: Vec<Value> = sqlx::query_scalar::<_, Value>(&self.comments_sql)
            .bind(board_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::query(format!("comments query failed: {}", e)))?;

        rows.into_iter()
            .map(|row| into_columns(row).map(Comment::new))
            .collect()
    }

    async fn board(&self, board_id: Option<&str>) -> Result<Option<Board>, DomainError> {
        let row: Option<Value> = sqlx::query_scalar::<_, Value>(BOARD_SQL)
            .bind(board_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::query(format!("board query failed: {}", e)))?;

        row.map(|row| into_columns(row).map(Board::new)).transpose()
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::unavailable(e.to_string()))?;

        Ok(())
    }
}
