use super::InterviewStore;
use crate::domain::error::{AppError, Result};
use crate::domain::interview::InterviewRecord;
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

pub struct SqliteInterviewStore {
    pool: Pool<Sqlite>,
}

impl SqliteInterviewStore {
    pub async fn init(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to parse connection string: {}", e))
            })?
            .create_if_missing(true);

        // An in-memory database lives and dies with its connection.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {}", e)))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS interviews (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                document TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create table: {}", e)))?;

        Ok(Self { pool })
    }

    #[cfg(test)]
    async fn list_documents(&self) -> Result<Vec<(String, InterviewRecord)>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, document FROM interviews ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Failed to list: {}", e)))?;

        rows.into_iter()
            .map(|(id, document)| -> Result<(String, InterviewRecord)> {
                Ok((id, serde_json::from_str(&document)?))
            })
            .collect()
    }
}

#[async_trait]
impl InterviewStore for SqliteInterviewStore {
    async fn create(&self, record: &InterviewRecord) -> Result<String> {
        record
            .validate()
            .map_err(|e| AppError::DatabaseError(format!("Invalid interview document: {}", e)))?;

        let id = Uuid::new_v4().to_string();
        let document = serde_json::to_string(record)?;

        sqlx::query(
            "INSERT INTO interviews (id, user_id, document, created_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&record.user_id)
        .bind(&document)
        .bind(&record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(id)
    }
}
