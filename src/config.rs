use std::time::Duration;

use clap::{builder::NonEmptyStringValueParser, Parser};

use crate::constants::{DEFAULT_USER_AGENT, NWS_API_BASE};

/// Command-line arguments for the weather forecast server
#[derive(Parser, Debug)]
#[command(name = "weather-forecast-mcp")]
#[command(about = "MCP server exposing the weather.gov forecast lookup as a tool")]
#[command(version)]
pub struct Args {
    /// User-Agent header sent to the weather API (it rejects anonymous requests)
    #[arg(
        long,
        env = "WEATHER_MCP_USER_AGENT",
        default_value = DEFAULT_USER_AGENT,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub user_agent: String,

    /// Base URL of the points endpoint
    #[arg(long, env = "WEATHER_MCP_API_BASE", default_value = NWS_API_BASE)]
    pub api_base: String,

    /// Per-request timeout in seconds (unset uses the HTTP client default)
    #[arg(long, env = "WEATHER_MCP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn into_config(self) -> WeatherConfig {
        WeatherConfig {
            api_base: self.api_base.trim_end_matches('/').to_string(),
            user_agent: self.user_agent,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Settings shared by every outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl WeatherConfig {
    /// Points the client at another upstream, e.g. a local stub
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}
