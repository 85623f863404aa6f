use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::client::ForecastClient;
use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::formatters::{format_error, render_forecast};
use crate::models::WeatherForecastRequest;

/// Weather service that answers MCP tool calls
#[derive(Clone)]
pub struct Weather {
    client: Arc<ForecastClient>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = ForecastClient::new(config)?;

        Ok(Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    /// Runs the forecast lookup and maps it onto a tool result.
    ///
    /// Failures never escape as protocol errors; they come back as error-flagged
    /// results. Cancelling `ct` drops the in-flight HTTP request.
    pub async fn forecast(
        &self,
        request: WeatherForecastRequest,
        ct: CancellationToken,
    ) -> CallToolResult {
        let lookup = self.client.fetch_forecast(&request.lat, &request.lon);

        let outcome = tokio::select! {
            result = lookup => result,
            _ = ct.cancelled() => Err(WeatherError::Cancelled),
        };

        match outcome {
            Ok(document) => CallToolResult::success(vec![Content::text(render_forecast(&document))]),
            Err(e) => {
                tracing::warn!(lat = %request.lat, lon = %request.lon, error = %e, "Forecast lookup failed");
                CallToolResult::error(vec![Content::text(format_error(&e))])
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "Weather Forecast MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Forecasts from the National Weather Service (weather.gov). \
                Call weather_forecast with a latitude and longitude inside the US."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Looks up the weather.gov forecast for a coordinate pair
    #[tool(description = "Busca previsão do tempo da Weather.gov (USA)")]
    async fn weather_forecast(
        &self,
        Parameters(request): Parameters<WeatherForecastRequest>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for coordinates: {}, {}", request.lat, request.lon);

        Ok(self.forecast(request, context.ct).await)
    }
}
