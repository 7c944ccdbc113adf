use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user request as it moves through the handler.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub raw_text: String,
    pub is_tomorrow: bool,
    /// Sanitized location; empty until extraction has run.
    pub extracted_location: String,
}

impl WeatherQuery {
    pub fn horizon(&self) -> Horizon {
        Horizon::from_is_tomorrow(self.is_tomorrow)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    Today,
    Tomorrow,
}

impl Horizon {
    pub fn from_is_tomorrow(is_tomorrow: bool) -> Self {
        if is_tomorrow { Horizon::Tomorrow } else { Horizon::Today }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Today => "today",
            Horizon::Tomorrow => "tomorrow",
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First geocoding match for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastResult {
    Current {
        temperature_c: f64,
        wind_kph: f64,
        condition_code: i64,
    },
    Daily {
        condition_code: i64,
        temp_max_c: f64,
        temp_min_c: f64,
        date: Option<NaiveDate>,
    },
}

impl ForecastResult {
    pub fn condition_code(&self) -> i64 {
        match self {
            ForecastResult::Current { condition_code, .. }
            | ForecastResult::Daily { condition_code, .. } => *condition_code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureClass {
    Hot,
    Cold,
    Moderate,
}

impl TemperatureClass {
    /// Above 30°C is hot, below 15°C is cold.
    pub fn classify(temperature_c: f64) -> Self {
        if temperature_c > 30.0 {
            TemperatureClass::Hot
        } else if temperature_c < 15.0 {
            TemperatureClass::Cold
        } else {
            TemperatureClass::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureClass::Hot => "hot",
            TemperatureClass::Cold => "cold",
            TemperatureClass::Moderate => "moderate",
        }
    }
}

/// A finished answer: where, what was fetched, and the rendered sentence.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: GeoResult,
    pub forecast: ForecastResult,
    pub message: String,
}
