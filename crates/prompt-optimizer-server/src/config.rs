//! Server configuration
//!
//! Read from the process environment, optionally seeded from a `.env` file.

use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "static";

/// Deployment mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Development => write!(f, "development"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            _ => Err(format!(
                "Unknown environment: {}. Valid: production, development",
                s
            )),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Directory holding `usage_stats.json`
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Optional JSON catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Load config from `.env` (if present) and the process environment
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value {:?}", raw))?,
            None => defaults.port,
        };

        let environment = match lookup("APP_ENV") {
            Some(raw) => raw.parse::<Environment>().map_err(anyhow::Error::msg)?,
            None => defaults.environment,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            environment,
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self.environment {
            Environment::Development => {
                "prompt_optimizer=debug,prompt_optimizer_server=debug,tower_http=debug"
            }
            Environment::Production => {
                "prompt_optimizer=info,prompt_optimizer_server=info,tower_http=info"
            }
        }
    }
}
