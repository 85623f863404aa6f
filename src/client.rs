use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::models::PointsResponse;

/// HTTP client for the two-step weather.gov forecast lookup.
///
/// Holds no per-request state, so a single instance is shared by all tool calls.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    api_base: String,
}

impl ForecastClient {
    pub fn new(config: &WeatherConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_base: config.api_base.clone(),
        })
    }

    /// Builds the points URL; coordinates are passed through untouched
    pub fn points_url(&self, lat: &str, lon: &str) -> String {
        format!("{}/points/{},{}", self.api_base, lat, lon)
    }

    /// Resolves the forecast URL advertised for a coordinate pair.
    ///
    /// A points document without `properties.forecast` (absent or null, at
    /// any level) yields an empty string.
    pub async fn resolve_forecast_url(&self, lat: &str, lon: &str) -> Result<String, WeatherError> {
        let url = self.points_url(lat, lon);
        let points = self.get_json::<Option<PointsResponse>>(&url).await?;
        Ok(points.unwrap_or_default().forecast_url())
    }

    /// Fetches a forecast document as an opaque JSON value
    pub async fn fetch_document(&self, url: &str) -> Result<Value, WeatherError> {
        self.get_json::<Value>(url).await
    }

    /// Resolves the forecast URL for `lat`,`lon` and fetches the document behind it.
    ///
    /// An empty forecast URL is not special-cased: the second request is still
    /// attempted and fails as a network error.
    pub async fn fetch_forecast(&self, lat: &str, lon: &str) -> Result<Value, WeatherError> {
        let forecast_url = self.resolve_forecast_url(lat, lon).await?;
        if forecast_url.is_empty() {
            tracing::warn!(lat, lon, "Points response carried no forecast URL");
        }
        self.fetch_document(&forecast_url).await
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        tracing::debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::network(url, e))?;

        // First JSON value wins; anything after it is ignored
        match serde_json::Deserializer::from_slice(&body).into_iter::<T>().next() {
            Some(value) => value.map_err(|e| WeatherError::decode(url, e)),
            None => serde_json::from_slice(&body).map_err(|e| WeatherError::decode(url, e)),
        }
    }
}
