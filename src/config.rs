//! Environment-derived configuration.

use crate::constants::KMA_API_BASE;
use crate::error::ConfigError;

/// Environment variable holding the KMA service credential
pub const SERVICE_KEY_VAR: &str = "WEATHER_API_KEY";

/// Environment variable overriding the upstream API base URL
pub const API_BASE_VAR: &str = "WEATHER_API_BASE";

/// Runtime configuration for the weather service
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential sent as `serviceKey` on every upstream call
    pub service_key: String,

    /// Upstream API base URL
    pub api_base: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// The service key is required; the API base falls back to the public
    /// KMA endpoint when no override is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let service_key = std::env::var(SERVICE_KEY_VAR).map_err(|_| ConfigError::MissingEnvVar {
            var: SERVICE_KEY_VAR.to_string(),
        })?;

        let api_base =
            std::env::var(API_BASE_VAR).unwrap_or_else(|_| KMA_API_BASE.to_string());

        Ok(Self {
            service_key,
            api_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment access is process-global, so the missing-var and
    // present-var cases share one test.
    #[test]
    fn from_env_requires_service_key() {
        std::env::remove_var(SERVICE_KEY_VAR);
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains(SERVICE_KEY_VAR));

        std::env::set_var(SERVICE_KEY_VAR, "abc123");
        let config = Config::from_env().unwrap();
        assert_eq!(config.service_key, "abc123");
        assert_eq!(config.api_base, KMA_API_BASE);
        std::env::remove_var(SERVICE_KEY_VAR);
    }
}
