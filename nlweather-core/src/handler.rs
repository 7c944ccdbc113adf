use anyhow::Result;

use crate::{
    config::Config,
    error::QueryError,
    extractor::{LocationExtractor, extractor_from_config},
    forecast::ForecastClient,
    format::format_forecast,
    geocode::GeocodingClient,
    http::build_client,
    model::{WeatherQuery, WeatherReport},
    parser::parse_weather_input,
    sanitizer::sanitize_location,
};

/// Answers free-text weather questions.
///
/// Runs parse → extract → sanitize → geocode → forecast → format, calling
/// each external service at most once per question.
#[derive(Debug)]
pub struct WeatherQueryHandler {
    extractor: Box<dyn LocationExtractor>,
    geocoder: GeocodingClient,
    forecaster: ForecastClient,
}

impl WeatherQueryHandler {
    pub fn new(
        extractor: Box<dyn LocationExtractor>,
        geocoder: GeocodingClient,
        forecaster: ForecastClient,
    ) -> Self {
        Self {
            extractor,
            geocoder,
            forecaster,
        }
    }

    /// Wire a handler from configuration. `offline` skips the chat model.
    pub fn from_config(config: &Config, offline: bool) -> Result<Self> {
        let http = build_client(config.request_timeout())?;

        Ok(Self::new(
            extractor_from_config(config, http.clone(), offline),
            GeocodingClient::new(config.endpoints.geocoding_url.clone(), http.clone()),
            ForecastClient::new(config.endpoints.forecast_url.clone(), http),
        ))
    }

    /// Answer `text` with a sentence. Failures become apologies; this
    /// never returns an error.
    pub async fn handle(&self, text: &str) -> String {
        match self.answer(text).await {
            Ok(report) => {
                tracing::info!(response = %report.message, "weather response");
                report.message
            }
            Err(err) => {
                let message = err.user_message();
                match &err {
                    QueryError::LocationNotIdentified { .. } | QueryError::LocationNotFound { .. } => {
                        tracing::warn!(kind = ?err.kind(), error = %err, "{message}")
                    }
                    _ => tracing::error!(kind = ?err.kind(), error = %err, "weather query failed"),
                }
                message
            }
        }
    }

    /// Answer `text`, keeping the failure structured.
    pub async fn answer(&self, text: &str) -> Result<WeatherReport, QueryError> {
        tracing::info!(input = text, "handling weather query");

        let parsed = parse_weather_input(text);
        let mut query = WeatherQuery {
            raw_text: text.to_string(),
            is_tomorrow: parsed.is_tomorrow,
            extracted_location: String::new(),
        };
        tracing::info!(is_tomorrow = query.is_tomorrow, guess = %parsed.location_guess, "parsed input");

        let raw_location = self
            .extractor
            .extract(&query.raw_text)
            .await
            .map_err(|e| QueryError::ExtractionFailed(format!("{e:#}")))?;
        tracing::info!(raw = %raw_location, "extracted location");

        query.extracted_location = sanitize_location(&raw_location);
        tracing::info!(location = %query.extracted_location, "sanitized location");

        if query.extracted_location.is_empty() {
            return Err(QueryError::LocationNotIdentified { raw: raw_location });
        }

        let location = self.geocoder.resolve(&query.extracted_location).await?;
        let forecast = self
            .forecaster
            .fetch(location.latitude, location.longitude, query.is_tomorrow)
            .await?;

        let message = format_forecast(&location.resolved_name, &forecast);
        tracing::debug!(
            horizon = %query.horizon(),
            condition_code = forecast.condition_code(),
            "formatted response"
        );

        Ok(WeatherReport {
            location,
            forecast,
            message,
        })
    }
}
