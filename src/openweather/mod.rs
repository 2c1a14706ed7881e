use crate::config::Config;
use crate::openweather::errors::UpstreamError;
use crate::openweather::models::{ForecastQuery, GeocodingMatch, GeocodingQuery};
use reqwest::Client;
use std::sync::Arc;

pub mod errors;
pub mod models;
#[cfg(test)]
mod tests;

/// Thin wrapper around the OpenWeather geocoding and forecast APIs that appends the API key to
/// every request.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: Arc<Config>,
}

impl OpenWeatherClient {
    const USER_AGENT: &'static str = concat!("weather-relay/", env!("CARGO_PKG_VERSION"));
    const GEOCODING_RESULT_LIMIT: u8 = 1;
    const UNITS: &'static str = "metric";

    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(Self::USER_AGENT);
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub async fn geocode(&self, location: &str) -> Result<Vec<GeocodingMatch>, UpstreamError> {
        tracing::debug!(message = "making direct geocoding request", location);
        let query = GeocodingQuery {
            q: location,
            limit: Self::GEOCODING_RESULT_LIMIT,
            appid: self.config.api_key.as_str(),
        };
        let response = self
            .http
            .get(self.config.geocoding_url.clone())
            .query(&query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(UpstreamError::request)?;
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(UpstreamError::request)?;
        serde_json::from_value(body).map_err(UpstreamError::decode)
    }

    pub async fn forecast(&self, lat: f64, lng: f64) -> Result<serde_json::Value, UpstreamError> {
        tracing::debug!(message = "making forecast request", lat, lng);
        let query = ForecastQuery {
            lat,
            lon: lng,
            units: Self::UNITS,
            appid: self.config.api_key.as_str(),
        };
        let response = self
            .http
            .get(self.config.forecast_url.clone())
            .query(&query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(UpstreamError::request)?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(UpstreamError::request)
    }
}
