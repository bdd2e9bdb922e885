//! Error types for the KMA weather MCP server.

use rmcp::ErrorData;
use thiserror::Error;

/// Errors raised while serving a `get-weather` call
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Tool arguments violated one or more input constraints
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    /// Upstream replied without the expected record list
    #[error("Failed to fetch weather data: {message}")]
    UpstreamData { message: String },

    /// Upstream replied with a non-success HTTP status
    #[error("Request failed with status: {status}")]
    UpstreamStatus { status: reqwest::StatusCode },

    /// Network or protocol failure talking to the upstream API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// One or more violated input constraints, each naming the offending field
#[derive(Error, Debug)]
#[error("{}", .issues.join(", "))]
pub struct ValidationError {
    pub issues: Vec<String>,
}

impl From<WeatherError> for ErrorData {
    fn from(err: WeatherError) -> Self {
        match &err {
            WeatherError::Validation(_) => ErrorData::invalid_params(err.to_string(), None),
            _ => ErrorData::internal_error(err.to_string(), None),
        }
    }
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {var}")]
    MissingEnvVar { var: String },
}
