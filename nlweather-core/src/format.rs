use crate::{
    conditions::describe,
    model::{ForecastResult, TemperatureClass},
};

/// Render a forecast for `location_name` as a single sentence.
///
/// Unknown condition codes read as "Unknown conditions".
pub fn format_forecast(location_name: &str, forecast: &ForecastResult) -> String {
    match *forecast {
        ForecastResult::Current {
            temperature_c,
            wind_kph,
            condition_code,
        } => format!(
            "The current weather in {location_name} is {} with a temperature of \
             {temperature_c}°C ({}) and a windspeed of {wind_kph} km/h.",
            describe(condition_code),
            TemperatureClass::classify(temperature_c).as_str(),
        ),
        ForecastResult::Daily {
            condition_code,
            temp_max_c,
            temp_min_c,
            ..
        } => format!(
            "The weather in {location_name} tomorrow will be {}, \
             with a high of {temp_max_c}°C and a low of {temp_min_c}°C.",
            describe(condition_code),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::MISSING_CODE;

    fn current(temperature_c: f64) -> ForecastResult {
        ForecastResult::Current {
            temperature_c,
            wind_kph: 12.5,
            condition_code: 0,
        }
    }

    #[test]
    fn tomorrow_sentence() {
        let forecast = ForecastResult::Daily {
            condition_code: 61,
            temp_max_c: 31.0,
            temp_min_c: 22.0,
            date: None,
        };
        assert_eq!(
            format_forecast("Pune", &forecast),
            "The weather in Pune tomorrow will be Slight rain, with a high of 31°C and a low of 22°C."
        );
    }

    #[test]
    fn current_sentence_classifies_temperature() {
        assert_eq!(
            format_forecast("Pune", &current(32.0)),
            "The current weather in Pune is Clear sky with a temperature of 32°C (hot) and a windspeed of 12.5 km/h."
        );
        assert!(format_forecast("Oslo", &current(10.0)).contains("10°C (cold)"));
        assert!(format_forecast("Rome", &current(20.0)).contains("20°C (moderate)"));
    }

    #[test]
    fn fractional_values_are_kept() {
        let forecast = ForecastResult::Daily {
            condition_code: 3,
            temp_max_c: 18.4,
            temp_min_c: -2.5,
            date: None,
        };
        assert!(format_forecast("Oslo", &forecast).ends_with("high of 18.4°C and a low of -2.5°C."));
    }

    #[test]
    fn unknown_code_does_not_fail() {
        let forecast = ForecastResult::Current {
            temperature_c: 20.0,
            wind_kph: 0.0,
            condition_code: MISSING_CODE,
        };
        assert!(format_forecast("Rome", &forecast).contains("is Unknown conditions with"));
    }
}
