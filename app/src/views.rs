//! Views for the test project.
//!
//! WARNING: every function here is vulnerable on purpose (SQL injection, XSS,
//! missing authorization, hardcoded credentials). They exist to be flagged by
//! review tooling. DO NOT use these patterns in production code.

use std::fmt::{Display, Formatter, Result as FmtResult};

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::db::{Cursor, Row};

const ADMIN_USERNAME: &str = "admin";
// BUG: hardcoded credentials (intentional, CWE-798)
const ADMIN_PASSWORD: &str = "admin123";

/// A profile mapping lacked a key the template needs.
#[derive(Debug, PartialEq)]
pub struct MissingField(String);

impl MissingField {
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl Display for MissingField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Missing profile field: {}", self.0)
    }
}

impl std::error::Error for MissingField {}

/// BUG: SQL injection via format string (intentional, CWE-89).
#[instrument(skip(cursor))]
pub async fn get_user_by_name<C>(name: &str, cursor: &mut C) -> Result<Option<Row>>
where
    C: Cursor + ?Sized,
{
    let query = format!("SELECT * FROM users WHERE name = '{}'", name);
    debug!(%query);
    cursor.execute(&query).await?;
    cursor.fetchone().await
}

/// BUG: no CSRF protection, no input validation (intentional, CWE-352 / CWE-89).
#[instrument(skip(cursor))]
pub async fn update_user_email<C, I>(user_id: I, new_email: &str, cursor: &mut C) -> Result<()>
where
    C: Cursor + ?Sized,
    I: Display + std::fmt::Debug,
{
    let query = format!(
        "UPDATE users SET email = '{}' WHERE id = {}",
        new_email, user_id
    );
    debug!(%query);
    cursor.execute(&query).await
}

/// BUG: no authorization check (intentional, CWE-862).
#[instrument(skip(cursor))]
pub async fn delete_user<C, I>(user_id: I, cursor: &mut C) -> Result<()>
where
    C: Cursor + ?Sized,
    I: Display + std::fmt::Debug,
{
    let query = format!("DELETE FROM users WHERE id = {}", user_id);
    debug!(%query);
    cursor.execute(&query).await
}

/// BUG: unescaped user input in markup (intentional, CWE-79).
pub fn render_profile(user: &Map<String, Value>) -> Result<String, MissingField> {
    let name = field(user, "name")?;
    let bio = field(user, "bio")?;
    Ok(format!("<h1>Welcome, {}</h1><p>{}</p>", name, bio))
}

pub fn authenticate(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

fn field(user: &Map<String, Value>, key: &str) -> Result<String, MissingField> {
    match user.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(MissingField(key.to_string())),
    }
}
