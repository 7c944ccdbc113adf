//! Open-Meteo forecast client: current conditions or tomorrow's daily summary.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    conditions::MISSING_CODE,
    error::{QueryError, Upstream},
    http::{join_url, read_body, transport_error},
    model::{ForecastResult, Horizon},
};

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com";

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode";
const TOMORROW: usize = 1;

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current_weather: Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature: f64,
    windspeed: f64,
    weathercode: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: Option<DailyBlock>,
}

// Open-Meteo emits `null` for days it has no data for.
#[derive(Debug, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    time: Vec<Option<String>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    weathercode: Vec<Option<i64>>,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Fetch weather for a coordinate pair.
    ///
    /// With `is_tomorrow` this asks for daily aggregates and picks the
    /// second day; otherwise it asks for the current conditions block.
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        is_tomorrow: bool,
    ) -> Result<ForecastResult, QueryError> {
        if is_tomorrow {
            self.fetch_tomorrow(latitude, longitude).await
        } else {
            self.fetch_current(latitude, longitude).await
        }
    }

    async fn get(&self, params: &[(&str, String)]) -> Result<String, QueryError> {
        let url = join_url(&self.base_url, "v1/forecast");
        tracing::debug!(%url, ?params, "forecast request");

        let res = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| transport_error(Upstream::Forecast, e))?;

        read_body(res, Upstream::Forecast).await
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<ForecastResult, QueryError> {
        let body = self
            .get(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .await?;

        let parsed: CurrentResponse = serde_json::from_str(&body)
            .map_err(|e| QueryError::parse(Horizon::Today, format!("malformed response: {e}")))?;

        let current = parsed
            .current_weather
            .ok_or_else(|| QueryError::parse(Horizon::Today, "response has no current_weather block"))?;

        let condition_code = current.weathercode.unwrap_or(MISSING_CODE);
        tracing::info!(
            temperature = current.temperature,
            windspeed = current.windspeed,
            condition_code,
            "current conditions fetched"
        );

        Ok(ForecastResult::Current {
            temperature_c: current.temperature,
            wind_kph: current.windspeed,
            condition_code,
        })
    }

    async fn fetch_tomorrow(&self, latitude: f64, longitude: f64) -> Result<ForecastResult, QueryError> {
        let body = self
            .get(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .await?;

        let parsed: DailyResponse = serde_json::from_str(&body)
            .map_err(|e| QueryError::parse(Horizon::Tomorrow, format!("malformed response: {e}")))?;

        let daily = parsed
            .daily
            .ok_or_else(|| QueryError::parse(Horizon::Tomorrow, "response has no daily block"))?;

        let condition_code = tomorrow_entry(&daily.weathercode, "weathercode")?;
        let temp_max_c = tomorrow_entry(&daily.temperature_2m_max, "temperature_2m_max")?;
        let temp_min_c = tomorrow_entry(&daily.temperature_2m_min, "temperature_2m_min")?;
        let date = daily
            .time
            .get(TOMORROW)
            .and_then(Option::as_deref)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

        tracing::info!(?date, temp_max_c, temp_min_c, condition_code, "daily forecast fetched");

        Ok(ForecastResult::Daily {
            condition_code,
            temp_max_c,
            temp_min_c,
            date,
        })
    }
}

fn tomorrow_entry<T: Copy>(values: &[Option<T>], field: &str) -> Result<T, QueryError> {
    values.get(TOMORROW).copied().flatten().ok_or_else(|| {
        QueryError::parse(
            Horizon::Tomorrow,
            format!("`{field}` has no value for tomorrow ({} entries)", values.len()),
        )
    })
}
