// src/config/mod.rs
// All values come from the environment (.env supported); defaults cover local dev

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize)]
pub struct CinescopeConfig {
    // ── Metadata API (OMDb)
    pub omdb_base_url: String,
    pub omdb_api_key: String,

    // ── Generative API (Gemini)
    pub gemini_base_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,
    pub migrations_dir: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Timeouts (in seconds)
    pub http_timeout: u64,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl CinescopeConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            omdb_base_url: env_var_or("OMDB_BASE_URL", "https://www.omdbapi.com/".to_string()),
            omdb_api_key: env_var_or("OMDB_API_KEY", String::new()),
            gemini_base_url: env_var_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com/v1beta".to_string(),
            ),
            gemini_api_key: env_var_or("GEMINI_API_KEY", String::new()),
            gemini_model: env_var_or("GEMINI_MODEL", "gemini-2.0-flash".to_string()),
            database_url: env_var_or(
                "DATABASE_URL",
                "sqlite:./cinescope.db?mode=rwc".to_string(),
            ),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            migrations_dir: env_var_or("CINESCOPE_MIGRATIONS_DIR", "./migrations".to_string()),
            host: env_var_or("CINESCOPE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("CINESCOPE_PORT", 8080),
            http_timeout: env_var_or("CINESCOPE_HTTP_TIMEOUT", 30),
            log_level: env_var_or("CINESCOPE_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get timeout for outbound HTTP requests
    pub fn http_timeout_secs(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.http_timeout)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<CinescopeConfig> = Lazy::new(CinescopeConfig::from_env);
