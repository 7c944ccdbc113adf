//! Core library for the `nlweather` CLI.
//!
//! This crate defines:
//! - Keyword parsing and sanitizing of free-text weather questions
//! - Geocoding and forecast clients for the Open-Meteo APIs
//! - Pluggable location extraction (chat model or offline heuristics)
//! - The query handler that turns a question into a sentence
//! - Configuration & credentials handling
//!
//! It is used by `nlweather-cli`, but can also be embedded in other assistants.

pub mod conditions;
pub mod config;
pub mod error;
pub mod extractor;
pub mod forecast;
pub mod format;
pub mod geocode;
pub mod handler;
mod http;
pub mod model;
pub mod parser;
pub mod sanitizer;
pub mod text;

pub use config::Config;
pub use error::{ErrorKind, QueryError};
pub use extractor::{ChatExtractor, HeuristicExtractor, LocationExtractor};
pub use forecast::ForecastClient;
pub use geocode::GeocodingClient;
pub use handler::WeatherQueryHandler;
pub use http::build_client;
pub use model::{ForecastResult, GeoResult, Horizon, WeatherQuery, WeatherReport};
pub use parser::{ParsedInput, parse_weather_input};
pub use sanitizer::sanitize_location;
