// Adapter Configuration (environment-driven, with defaults)

use std::time::Duration;
use thiserror::Error;
use url::Url;

const ENV_API_URL: &str = "WORKBOOKS_API_URL";
const ENV_API_KEY: &str = "WORKBOOKS_API_KEY";
const ENV_ENVIRONMENT: &str = "WORKBOOKS_ENV";
const ENV_TIMEOUT_SECS: &str = "WORKBOOKS_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Which Workbooks instance the adapter talks to.
///
/// Mirrors the integration's TEST/LIVE mode switch; defaults to Test so
/// a misconfigured deployment never writes against production data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnvironment {
    Test,
    Live,
}

impl ApiEnvironment {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "test" => Some(Self::Test),
            "live" => Some(Self::Live),
            _ => None,
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Test => "https://test.workbooks.com/",
            Self::Live => "https://secure.workbooks.com/",
        }
    }
}

/// Connection settings for [`crate::WorkbooksHttpClient`]
#[derive(Debug, Clone)]
pub struct WorkbooksConfig {
    pub base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
}

impl WorkbooksConfig {
    /// Load configuration from the environment.
    ///
    /// `WORKBOOKS_API_KEY` is required. `WORKBOOKS_ENV` (`test`/`live`,
    /// default `test`) picks the instance; `WORKBOOKS_API_URL`
    /// overrides the base URL entirely. `WORKBOOKS_TIMEOUT_SECS`
    /// defaults to 30.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key =
            std::env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingVar(ENV_API_KEY))?;

        let environment = match std::env::var(ENV_ENVIRONMENT) {
            Ok(raw) => ApiEnvironment::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                var: ENV_ENVIRONMENT,
                reason: format!("expected `test` or `live`, got `{raw}`"),
            })?,
            Err(_) => ApiEnvironment::Test,
        };

        let base_url = match std::env::var(ENV_API_URL) {
            Ok(raw) => Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                var: ENV_API_URL,
                reason: e.to_string(),
            })?,
            // Infallible: both defaults are valid absolute URLs
            Err(_) => Url::parse(environment.base_url()).map_err(|e| ConfigError::Invalid {
                var: ENV_API_URL,
                reason: e.to_string(),
            })?,
        };

        let timeout = match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    var: ENV_TIMEOUT_SECS,
                    reason: format!("expected an integer number of seconds, got `{raw}`"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            api_key,
            timeout,
        })
    }

    /// Configuration for a known environment (used by tests and tools)
    pub fn for_environment(environment: ApiEnvironment, api_key: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(environment.base_url())
                .expect("environment base URLs are statically valid"),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(ApiEnvironment::parse("test"), Some(ApiEnvironment::Test));
        assert_eq!(ApiEnvironment::parse("LIVE"), Some(ApiEnvironment::Live));
        assert_eq!(ApiEnvironment::parse("staging"), None);
        assert_eq!(ApiEnvironment::parse(""), None);
    }

    #[test]
    fn test_environment_base_urls_are_valid() {
        for env in [ApiEnvironment::Test, ApiEnvironment::Live] {
            let url = Url::parse(env.base_url()).unwrap();
            assert_eq!(url.scheme(), "https");
        }
    }

    #[test]
    fn test_for_environment_defaults() {
        let config = WorkbooksConfig::for_environment(ApiEnvironment::Live, "key-123");
        assert_eq!(config.base_url.as_str(), "https://secure.workbooks.com/");
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
