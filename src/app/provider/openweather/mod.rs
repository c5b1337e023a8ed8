use chrono::{DateTime, Utc};

use crate::app::Temperature;

/// Body of `GET /weather`. Only the fields read by the interpreter are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrentWeather {
    pub main: RawMain,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

/// Body of `GET /forecast`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastResponse {
    pub list: Vec<RawForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawForecastEntry {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub dt: DateTime<Utc>,
    pub main: RawMain,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMain {
    pub temp: Temperature,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCondition {
    pub main: String,
}
