//! In-process stand-in for api.weather.gov

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use weather_forecast_mcp::WeatherConfig;

pub const TEST_USER_AGENT: &str = "weather-forecast-mcp-tests (ops@example.com)";

/// Canned answer for one stub route. `{base}` in the body expands to the stub's URL.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Points reply whose forecast link targets the stub's own `/forecast` route
pub fn points_to_stub_forecast() -> Reply {
    Reply::json(r#"{"properties":{"forecast":"{base}/forecast"}}"#)
}

struct StubState {
    base: String,
    points: Reply,
    forecast: Reply,
    points_hits: AtomicUsize,
    forecast_hits: AtomicUsize,
    coordinates: Mutex<Vec<String>>,
    user_agents: Mutex<Vec<String>>,
}

pub struct StubUpstream {
    state: Arc<StubState>,
}

impl StubUpstream {
    pub async fn spawn(points: Reply, forecast: Reply) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Arc::new(StubState {
            base: format!("http://{}", addr),
            points,
            forecast,
            points_hits: AtomicUsize::new(0),
            forecast_hits: AtomicUsize::new(0),
            coordinates: Mutex::new(Vec::new()),
            user_agents: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/points/{coords}", get(points_handler))
            .route("/forecast", get(forecast_handler))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { state }
    }

    pub fn base(&self) -> &str {
        &self.state.base
    }

    pub fn config(&self) -> WeatherConfig {
        WeatherConfig {
            user_agent: TEST_USER_AGENT.to_string(),
            ..WeatherConfig::default()
        }
        .with_api_base(self.base())
    }

    pub fn points_hits(&self) -> usize {
        self.state.points_hits.load(Ordering::SeqCst)
    }

    pub fn forecast_hits(&self) -> usize {
        self.state.forecast_hits.load(Ordering::SeqCst)
    }

    pub fn coordinates(&self) -> Vec<String> {
        self.state.coordinates.lock().unwrap().clone()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.state.user_agents.lock().unwrap().clone()
    }
}

/// Config pointing at a port nothing listens on
pub fn refused_config() -> WeatherConfig {
    let addr: SocketAddr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    WeatherConfig {
        user_agent: TEST_USER_AGENT.to_string(),
        ..WeatherConfig::default()
    }
    .with_api_base(format!("http://{}", addr))
}

async fn points_handler(
    State(state): State<Arc<StubState>>,
    Path(coords): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.points_hits.fetch_add(1, Ordering::SeqCst);
    state.coordinates.lock().unwrap().push(coords);
    record_user_agent(&state, &headers);
    respond(&state, &state.points).await
}

async fn forecast_handler(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.forecast_hits.fetch_add(1, Ordering::SeqCst);
    record_user_agent(&state, &headers);
    respond(&state, &state.forecast).await
}

fn record_user_agent(state: &StubState, headers: &HeaderMap) {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.user_agents.lock().unwrap().push(agent);
}

async fn respond(state: &StubState, reply: &Reply) -> Response {
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }
    let body = reply.body.replace("{base}", &state.base);
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/geo+json")],
        body,
    )
        .into_response()
}
