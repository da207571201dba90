use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{info, instrument};

use crate::config::DatabaseConfig;

mod cursor;
pub mod schema;

pub use cursor::SqliteCursor;

/// A fetched row, keyed by column name.
pub type Row = Map<String, Value>;

/// Cursor-like collaborator the views talk to.
///
/// Implementations run the text they are given as-is. There is no parameter
/// binding in this contract.
#[async_trait]
pub trait Cursor: Send {
    async fn execute(&mut self, query: &str) -> Result<()>;

    /// Next row of the last executed query, `None` once exhausted.
    async fn fetchone(&mut self) -> Result<Option<Row>>;
}

#[instrument]
pub async fn connect(database: &DatabaseConfig) -> Result<SqlitePool> {
    let url = database.connection_url()?;
    let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);

    // One long-lived connection, otherwise an in-memory database vanishes
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    info!("Connected to {}", url);
    Ok(pool)
}
