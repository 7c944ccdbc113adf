use std::fmt;

use crate::model::Horizon;

/// Which external service a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Geocoding,
    Forecast,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Upstream::Geocoding => "geocoding",
            Upstream::Forecast => "forecast",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LocationNotIdentified,
    LocationNotFound,
    UpstreamUnavailable,
    ForecastParseError,
    ExtractionFailed,
}

/// Everything that can stop a query before a weather sentence is produced.
///
/// None of these reach the end user directly: the handler logs the error and
/// replies with [`QueryError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("no location left after sanitizing {raw:?}")]
    LocationNotIdentified { raw: String },

    #[error("geocoding returned no results for {location:?}")]
    LocationNotFound { location: String },

    #[error("{service} service unavailable: {cause}")]
    UpstreamUnavailable { service: Upstream, cause: String },

    #[error("could not parse {horizon} forecast: {reason}")]
    ForecastParseError { horizon: Horizon, reason: String },

    #[error("location extraction failed: {0}")]
    ExtractionFailed(String),
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::LocationNotIdentified { .. } => ErrorKind::LocationNotIdentified,
            QueryError::LocationNotFound { .. } => ErrorKind::LocationNotFound,
            QueryError::UpstreamUnavailable { .. } => ErrorKind::UpstreamUnavailable,
            QueryError::ForecastParseError { .. } => ErrorKind::ForecastParseError,
            QueryError::ExtractionFailed(_) => ErrorKind::ExtractionFailed,
        }
    }

    pub(crate) fn upstream(service: Upstream, cause: impl fmt::Display) -> Self {
        QueryError::UpstreamUnavailable {
            service,
            cause: cause.to_string(),
        }
    }

    pub(crate) fn parse(horizon: Horizon, reason: impl Into<String>) -> Self {
        QueryError::ForecastParseError {
            horizon,
            reason: reason.into(),
        }
    }

    /// The sentence shown to the user in place of a forecast.
    pub fn user_message(&self) -> String {
        match self {
            QueryError::LocationNotIdentified { .. } => {
                "Sorry, I couldn't identify the location. Could you rephrase your query?".to_string()
            }
            QueryError::LocationNotFound { location } => format!(
                "Sorry, I couldn't find weather details for '{location}'. \
                 Please try the same or another location."
            ),
            QueryError::UpstreamUnavailable { cause, .. } => {
                format!("An error occurred while fetching weather data: {cause}")
            }
            QueryError::ForecastParseError {
                horizon: Horizon::Tomorrow,
                ..
            } => "Sorry, I couldn't fetch tomorrow’s forecast right now.".to_string(),
            QueryError::ForecastParseError {
                horizon: Horizon::Today,
                ..
            } => "Sorry, I couldn't fetch the weather details at this time.".to_string(),
            QueryError::ExtractionFailed(_) => {
                "An error occurred while fetching the weather. Please try again later.".to_string()
            }
        }
    }
}
