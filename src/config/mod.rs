use crate::cli::Args;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error(
        "OPENWEATHER_API_KEY is not set. Add it to the environment or a `.env` file, \
        or pass `--openweather-api-key`."
    )]
    MissingApiKey,
}

/// OpenWeather credential. Never printed in full.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Settings shared read-only by every request for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub geocoding_url: Url,
    pub forecast_url: Url,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let api_key = match args.openweather_api_key.as_deref() {
            Some(key) if !key.is_empty() => ApiKey(key.to_string()),
            _ => return Err(ConfigError::MissingApiKey),
        };
        Ok(Self {
            api_key,
            geocoding_url: args.geocoding_url.clone(),
            forecast_url: args.forecast_url.clone(),
            upstream_timeout: args.upstream_timeout_secs.map(Duration::from_secs),
        })
    }
}
