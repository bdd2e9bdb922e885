//! KMA Weather MCP Server
//!
//! A Model Context Protocol (MCP) server exposing a single `get-weather`
//! tool backed by the Korea Meteorological Administration village forecast
//! API. One tool call fans out into three upstream requests (current
//! conditions, very-short-range forecast, short-range forecast) and returns
//! their combined payload.

pub mod base_time;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod service;

pub use config::Config;
pub use error::WeatherError;
pub use service::Weather;
