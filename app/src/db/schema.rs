use anyhow::Result;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::models::User;

#[instrument(skip(pool))]
pub async fn create_users_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Seeds a user row and returns its id. The password goes in as-is.
#[instrument(skip(pool, user), fields(name = %user.name))]
pub async fn insert_user(pool: &SqlitePool, user: &User) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}
