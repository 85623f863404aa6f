pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use client::ForecastClient;
pub use config::{Args, WeatherConfig};
pub use error::WeatherError;
pub use service::Weather;
