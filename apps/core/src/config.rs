//! Runtime configuration loaded from the environment (and an optional `.env`).
//!
//! - `TRIAGE_LOG`: tracing filter directive (default `info`)
//! - `TRIAGE_LOG_FORMAT`: `pretty` or `json` (default `pretty`)
//! - `TRIAGE_PRETTY`: pretty-print JSON output (`true`/`false`, default `true`)

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const ENV_LOG_FILTER: &str = "TRIAGE_LOG";
pub const ENV_LOG_FORMAT: &str = "TRIAGE_LOG_FORMAT";
pub const ENV_PRETTY: &str = "TRIAGE_PRETTY";

const DEFAULT_LOG_FILTER: &str = "info";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// `EnvFilter` directive, e.g. `info` or `triage_core=debug`
    #[validate(length(min = 1))]
    pub log_filter: String,
    pub log_format: LogFormat,
    pub pretty_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
            pretty_output: true,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_vars()
    }

    /// Load from the current environment only
    pub fn from_vars() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Ok(filter) = env::var(ENV_LOG_FILTER) {
            config.log_filter = filter.trim().to_string();
        }
        if let Ok(format) = env::var(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }
        if let Ok(pretty) = env::var(ENV_PRETTY) {
            config.pretty_output = parse_bool(&pretty)?;
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("Expected a boolean, got: {}", other))),
    }
}
