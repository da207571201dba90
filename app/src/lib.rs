pub mod config;
pub mod db;
pub mod models;
pub mod views;

// Re-export key types for external use
pub use db::{Cursor, Row, SqliteCursor};
pub use models::{Product, User};
