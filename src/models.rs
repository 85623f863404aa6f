use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================

/// Envelope of `GET /points/{lat},{lon}`; only the forecast link is kept
#[derive(Debug, Default, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub properties: Option<PointsProperties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointsProperties {
    #[serde(default)]
    pub forecast: Option<String>,
}

impl PointsResponse {
    /// Forecast link, empty when absent or null at any level
    pub fn forecast_url(self) -> String {
        self.properties
            .and_then(|p| p.forecast)
            .unwrap_or_default()
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct WeatherForecastRequest {
    #[schemars(description = "Latitude for the weather forecast")]
    pub lat: String,
    #[schemars(description = "Longitude for the weather forecast")]
    pub lon: String,
}
