use anyhow::{anyhow, Result};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub engine: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Connection string understood by sqlx for this database entry.
    pub fn connection_url(&self) -> Result<String> {
        if !self.engine.ends_with("sqlite3") {
            return Err(anyhow!("Unsupported database engine: {}", self.engine));
        }

        if self.name == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else {
            Ok(format!("sqlite://{}", self.name))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub secret_key: String,
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub installed_apps: Vec<String>,
    pub databases: HashMap<String, DatabaseConfig>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::new_from_folder(".".to_string())
    }

    pub fn new_from_folder(folder: String) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .add_source(File::with_name(&format!("{}/config/default", folder)))
            // Add environment specific settings
            .add_source(
                File::with_name(&format!("{}/config/{}", folder, run_mode)).required(false),
            )
            // Add local overrides
            .add_source(File::with_name(&format!("{}/config/local", folder)).required(false))
            // Add environment variables with prefix "TRIPWIRE_"
            .add_source(
                Environment::with_prefix("TRIPWIRE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_hosts")
                    .with_list_parse_key("installed_apps"),
            )
            .build()?;

        s.try_deserialize()
    }

    pub fn default_database(&self) -> Result<&DatabaseConfig> {
        self.databases
            .get("default")
            .ok_or_else(|| anyhow!("No 'default' entry in databases"))
    }
}
