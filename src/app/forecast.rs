use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

use crate::app::provider::openweather::{RawCondition, RawForecastEntry};
use crate::app::Temperature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ClearSky,
    Cloudy,
    Rainy,
    Snowy,
    Unknown,
}

impl Condition {
    pub fn label(self) -> &'static str {
        match self {
            Condition::ClearSky => "Clear sky",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Snowy => "Snowy",
            Condition::Unknown => "Unknown",
        }
    }
}

impl serde::Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub temperature: Temperature,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastItem {
    #[serde(serialize_with = "serialize_iso_millis")]
    pub date: DateTime<Utc>,
    pub temperature: Temperature,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub current_weather: CurrentWeather,
    pub forecast: Vec<ForecastItem>,
}

fn serialize_iso_millis<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn interpret_condition(raw: &str) -> Condition {
    match raw.to_lowercase().as_str() {
        "clear" => Condition::ClearSky,
        "clouds" => Condition::Cloudy,
        "rain" => Condition::Rainy,
        "snow" => Condition::Snowy,
        _ => Condition::Unknown,
    }
}

/// Condition of the first entry of a provider `weather` array.
pub fn interpret_first_condition(conditions: &[RawCondition]) -> Condition {
    conditions
        .first()
        .map(|c| interpret_condition(&c.main))
        .unwrap_or(Condition::Unknown)
}

pub fn interpret_forecast(entries: &[RawForecastEntry]) -> Vec<ForecastItem> {
    entries
        .iter()
        .map(|entry| ForecastItem {
            date: entry.dt,
            temperature: entry.main.temp,
            condition: interpret_first_condition(&entry.weather),
        })
        .collect()
}
