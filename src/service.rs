use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use reqwest::Client;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;

use crate::base_time::{standard_base_time, ultra_short_base_time, BaseTime};
use crate::config::Config;
use crate::constants::{
    CURRENT_OBSERVATION_PATH, ULTRA_SHORT_FORECAST_PATH, USER_AGENT, VILLAGE_FORECAST_PATH,
};
use crate::error::WeatherError;
use crate::models::{ApiResponse, ForecastQuery, GetWeatherRequest, WeatherReport};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: Arc<Client>,
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        })
    }

    /// Calls one forecast endpoint with the shared query parameter set
    async fn fetch_endpoint(
        &self,
        path: &str,
        base: &BaseTime,
        nx: i32,
        ny: i32,
    ) -> Result<ApiResponse, WeatherError> {
        let url = format!("{}/{}", self.config.api_base, path);
        let query = ForecastQuery {
            service_key: &self.config.service_key,
            page_no: 1,
            num_of_rows: 1000,
            data_type: "JSON",
            base_date: &base.base_date,
            base_time: &base.base_time,
            nx,
            ny,
        };

        tracing::info!(
            "Fetching {} for base {} {}",
            path,
            base.base_date,
            base.base_time
        );

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(WeatherError::UpstreamStatus {
                status: response.status(),
            });
        }

        Ok(response.json::<ApiResponse>().await?)
    }

    /// Runs the three upstream calls and merges their record lists
    async fn fetch_weather_report(
        &self,
        request: &GetWeatherRequest,
    ) -> Result<WeatherReport, WeatherError> {
        // nx/ny are rounded degrees, not the KMA Lambert grid projection.
        let nx = request.latitude.round() as i32;
        let ny = request.longitude.round() as i32;

        let now = Utc::now();
        let standard = standard_base_time(now);
        let ultra_short = ultra_short_base_time(now);

        let current = self
            .fetch_endpoint(CURRENT_OBSERVATION_PATH, &standard, nx, ny)
            .await?;
        let ultra = self
            .fetch_endpoint(ULTRA_SHORT_FORECAST_PATH, &ultra_short, nx, ny)
            .await?;
        let village = self
            .fetch_endpoint(VILLAGE_FORECAST_PATH, &standard, nx, ny)
            .await?;

        Ok(WeatherReport {
            current: require_items(current)?,
            ultra_short_forecast: require_items(ultra)?,
            forecast: require_items(village)?,
        })
    }
}

/// Rejects envelopes that arrive without a record list
fn require_items(response: ApiResponse) -> Result<Vec<Value>, WeatherError> {
    let message = response
        .result_msg()
        .unwrap_or("unknown upstream error")
        .to_string();

    response
        .into_items()
        .ok_or(WeatherError::UpstreamData { message })
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-kma-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service backed by the KMA village forecast API. \
                Returns current conditions and short-range forecasts for a coordinate."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Fetches current conditions plus the two short-range forecast products
    #[tool(
        name = "get-weather",
        description = "Get current conditions, the very-short-range forecast, and the short-range forecast for a coordinate. Provide latitude and longitude (e.g., latitude: 37.5665, longitude: 126.9780 for Seoul)."
    )]
    pub async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting weather for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        request.validate().map_err(WeatherError::from)?;

        let report = self.fetch_weather_report(&request).await?;

        let text = serde_json::to_string_pretty(&report).map_err(|e| {
            McpError::internal_error(format!("Failed to encode report: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
