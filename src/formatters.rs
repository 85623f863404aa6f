use serde_json::Value;

use crate::constants::TOOL_ERROR_PREFIX;
use crate::error::WeatherError;

/// Renders a forecast document as compact JSON, keeping upstream key order
pub fn render_forecast(document: &Value) -> String {
    document.to_string()
}

/// Formats a lookup failure for the tool caller
pub fn format_error(error: &WeatherError) -> String {
    format!("{}: {}", TOOL_ERROR_PREFIX, error)
}
