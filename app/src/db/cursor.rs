use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Column, Row as SqlxRow};
use tracing::{debug, instrument};

use super::{Cursor, Row};

#[derive(Debug)]
pub struct SqliteCursor {
    pool: SqlitePool,
    rows: VecDeque<Row>,
}

impl SqliteCursor {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            rows: VecDeque::new(),
        }
    }
}

#[async_trait]
impl Cursor for SqliteCursor {
    #[instrument(skip(self))]
    async fn execute(&mut self, query: &str) -> Result<()> {
        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        self.rows = rows.iter().map(row_to_json).collect();

        debug!("Query returned {} rows", self.rows.len());
        Ok(())
    }

    async fn fetchone(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.pop_front())
    }
}

fn row_to_json(row: &SqliteRow) -> Row {
    row.columns()
        .iter()
        .map(|column| {
            let i = column.ordinal();
            (column.name().to_string(), column_value(row, i))
        })
        .collect()
}

fn column_value(row: &SqliteRow, i: usize) -> Value {
    if let Ok(v) = row.try_get::<Option<i64>, _>(i) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(i) {
        return v.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(i) {
        return v.map(Value::String).unwrap_or(Value::Null);
    }
    // Blobs are not surfaced
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create connection pool")
    }

    #[tokio::test]
    async fn test_fetchone_drains_rows() {
        let mut cursor = SqliteCursor::new(setup().await);

        cursor
            .execute("SELECT 1 AS id, 'Alice' AS name UNION ALL SELECT 2, 'Bob'")
            .await
            .unwrap();

        let first = cursor.fetchone().await.unwrap().unwrap();
        assert_eq!(first["id"], 1);
        assert_eq!(first["name"], "Alice");

        let second = cursor.fetchone().await.unwrap().unwrap();
        assert_eq!(second["name"], "Bob");

        assert!(cursor.fetchone().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_column_types() {
        let mut cursor = SqliteCursor::new(setup().await);

        cursor
            .execute("SELECT 1.5 AS price, NULL AS bio")
            .await
            .unwrap();

        let row = cursor.fetchone().await.unwrap().unwrap();
        assert_eq!(row["price"], 1.5);
        assert_eq!(row["bio"], Value::Null);
    }

    #[tokio::test]
    async fn test_execute_replaces_previous_results() {
        let mut cursor = SqliteCursor::new(setup().await);

        cursor.execute("SELECT 1 AS id").await.unwrap();
        cursor.execute("SELECT 2 AS id").await.unwrap();

        let row = cursor.fetchone().await.unwrap().unwrap();
        assert_eq!(row["id"], 2);
    }

    #[tokio::test]
    async fn test_execute_propagates_errors() {
        let mut cursor = SqliteCursor::new(setup().await);
        assert!(cursor.execute("SELECT * FROM missing_table").await.is_err());
    }
}
