//! HTTP client for the provider's current-weather endpoint.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::{config::Config, error::ApiError, model::WeatherSnapshot, units::Units};

const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The fetch surface the rest of the crate depends on, kept as a trait so
/// the location subsystem and tests can substitute a fake.
#[async_trait]
pub trait WeatherApi: Send + Sync {
    async fn fetch_city_weather(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherSnapshot, ApiError>;

    async fn fetch_coordinate_weather(
        &self,
        lat: &str,
        lon: &str,
        units: Units,
    ) -> Result<WeatherSnapshot, ApiError>;
}

/// Client for the provider's current-weather endpoint.
///
/// Each fetch is a single-shot, independent request; concurrent calls share
/// nothing mutable beyond the immutable credential and the HTTP connection
/// pool. No retry happens inside the client.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config, DEFAULT_ENDPOINT)
    }

    /// Point the client at a non-default endpoint, e.g. a local test server.
    pub fn with_endpoint(config: &Config, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: config.api_key.clone(),
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    /// Request URL for a free-text city query: `q`, `units`, `appid`.
    pub fn build_city_url(&self, city: &str, units: Units) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.endpoint).map_err(|_| ApiError::InvalidUrl)?;
        url.query_pairs_mut()
            .append_pair("q", city)
            .append_pair("units", units.as_str())
            .append_pair("appid", &self.api_key);
        Ok(url)
    }

    /// Request URL for a coordinate query: `lat`, `lon`, `units`, `appid`.
    /// No `q` parameter is sent on this flow.
    pub fn build_coordinate_url(
        &self,
        lat: &str,
        lon: &str,
        units: Units,
    ) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.endpoint).map_err(|_| ApiError::InvalidUrl)?;
        url.query_pairs_mut()
            .append_pair("lat", lat)
            .append_pair("lon", lon)
            .append_pair("units", units.as_str())
            .append_pair("appid", &self.api_key);
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<WeatherSnapshot, ApiError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ApiError::InvalidStatusCode(status.as_u16()));
        }

        if body.is_empty() {
            return Err(ApiError::EmptyData);
        }

        let snapshot: WeatherSnapshot = serde_json::from_str(&body)?;
        Ok(snapshot)
    }
}

#[async_trait]
impl WeatherApi for WeatherApiClient {
    async fn fetch_city_weather(
        &self,
        city: &str,
        units: Units,
    ) -> Result<WeatherSnapshot, ApiError> {
        let url = self.build_city_url(city, units)?;
        debug!(city, %units, "fetching current weather by city");
        self.fetch(url).await
    }

    async fn fetch_coordinate_weather(
        &self,
        lat: &str,
        lon: &str,
        units: Units,
    ) -> Result<WeatherSnapshot, ApiError> {
        let url = self.build_coordinate_url(lat, lon, units)?;
        debug!(lat, lon, %units, "fetching current weather by coordinates");
        self.fetch(url).await
    }
}
