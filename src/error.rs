use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the two-step forecast lookup
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection, DNS, timeout, or an unusable URL
    #[error("request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not the JSON we expected
    #[error("invalid JSON from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Upstream answered with a non-success status
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("request cancelled")]
    Cancelled,
}

impl WeatherError {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn decode(url: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.to_string(),
            source,
        }
    }
}
