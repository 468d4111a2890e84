// src/setup.rs

use std::fmt;
use tracing_subscriber::EnvFilter;

const DEFAULT_REQUIRED: &str = "first_name,last_name,email,phone";
const DEFAULT_EMAIL_FIELD: &str = "email";
const DEFAULT_MIN_LENGTH: &str = "first_name:3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub required: Vec<String>,
    pub email_field: String,
    pub min_lengths: Vec<(String, usize)>,
    pub log_format: LogFormat,
}

#[derive(Debug)]
pub(crate) struct ConfigError {
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = lookup("FORMCHECK_REQUIRED")
            .unwrap_or_else(|| DEFAULT_REQUIRED.to_string())
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        let email_field = lookup("FORMCHECK_EMAIL_FIELD")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL_FIELD.to_string());

        let min_lengths = parse_min_lengths(
            &lookup("FORMCHECK_MIN_LENGTH").unwrap_or_else(|| DEFAULT_MIN_LENGTH.to_string()),
        )?;

        let log_format = match lookup("FORMCHECK_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError {
                    message: format!("invalid FORMCHECK_LOG_FORMAT {other:?}: expected text or json"),
                })
            }
        };

        Ok(Config {
            required,
            email_field,
            min_lengths,
            log_format,
        })
    }
}

/// Parses `field:min` pairs separated by commas, e.g. `first_name:3,last_name:2`.
fn parse_min_lengths(raw: &str) -> Result<Vec<(String, usize)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<(String, usize), ConfigError> {
            let invalid = |reason: String| ConfigError {
                message: format!("invalid FORMCHECK_MIN_LENGTH entry {entry:?}: {reason}"),
            };
            let (field, min) = entry
                .split_once(':')
                .ok_or_else(|| invalid("expected field:min".to_string()))?;
            let field = field.trim();
            if field.is_empty() {
                return Err(invalid("field name is empty".to_string()));
            }
            let min = min.trim().parse::<usize>().map_err(|e| invalid(format!("{e}")))?;
            Ok((field.to_string(), min))
        })
        .collect()
}

pub(super) fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}
