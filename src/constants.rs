/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("weather-forecast-mcp/", env!("CARGO_PKG_VERSION"));

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Prefix of every error message returned by the forecast tool
pub const TOOL_ERROR_PREFIX: &str = "erro na API de clima";
