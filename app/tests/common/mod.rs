#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tripwire_app::config::DatabaseConfig;
use tripwire_app::db::{self, schema};
use tripwire_app::{Cursor, Row, User};

/// Cursor double that records every query and replays canned rows.
#[derive(Debug, Default)]
pub struct RecordingCursor {
    pub executed: Vec<String>,
    pub rows: VecDeque<Row>,
    pub fail_with: Option<String>,
}

impl RecordingCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push_back(row);
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn last_query(&self) -> Option<&str> {
        self.executed.last().map(String::as_str)
    }
}

#[async_trait]
impl Cursor for RecordingCursor {
    async fn execute(&mut self, query: &str) -> Result<()> {
        self.executed.push(query.to_string());
        match &self.fail_with {
            Some(message) => Err(anyhow!(message.clone())),
            None => Ok(()),
        }
    }

    async fn fetchone(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.pop_front())
    }
}

/// In-memory database seeded with Alice (id 1) and Bob (id 2).
pub async fn seeded_pool() -> Result<SqlitePool> {
    let pool = db::connect(&DatabaseConfig {
        engine: "django.db.backends.sqlite3".to_string(),
        name: ":memory:".to_string(),
    })
    .await?;

    schema::create_users_table(&pool).await?;
    schema::insert_user(&pool, &User::new("Alice", "alice@example.com", "secret123")).await?;
    schema::insert_user(&pool, &User::new("Bob", "bob@example.com", "hunter2")).await?;

    Ok(pool)
}
