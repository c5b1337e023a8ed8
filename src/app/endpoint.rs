use std::fmt;
use std::str::FromStr;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::app::error::WeatherError;
use crate::app::location::{LocationForm, LocationQuery};

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Zip values may carry a country suffix (`SW1A 1AA,GB`), so the comma stays.
const ZIP_ENCODE_SET: &AsciiSet = &COMPONENT_ENCODE_SET.remove(b',');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Weather,
    Forecast,
}

impl ResourceKind {
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Weather => "weather",
            ResourceKind::Forecast => "forecast",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ResourceKind {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weather" => Ok(ResourceKind::Weather),
            "forecast" => Ok(ResourceKind::Forecast),
            _ => Err(WeatherError::invalid_location("Invalid endpoint type")),
        }
    }
}

/// Builds provider URLs for a fixed base and API key.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    api_key: String,
}

impl Endpoints {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openweathermap.org/data/2.5";

    pub fn new(base_url: &str, api_key: String) -> Self {
        Endpoints {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }

    pub fn build(&self, kind: ResourceKind, query: &LocationQuery) -> Result<String, WeatherError> {
        let params = match query.form() {
            Some(LocationForm::Coordinates { lat, lon }) => format!("lat={}&lon={}", lat, lon),
            Some(LocationForm::Place { city, state, country }) => format!(
                "q={},{},{}",
                utf8_percent_encode(city, COMPONENT_ENCODE_SET),
                utf8_percent_encode(state, COMPONENT_ENCODE_SET),
                utf8_percent_encode(country, COMPONENT_ENCODE_SET),
            ),
            Some(LocationForm::Zip(zip)) => format!("zip={}", utf8_percent_encode(zip, ZIP_ENCODE_SET)),
            None => return Err(WeatherError::invalid_location("Invalid location input")),
        };

        Ok(format!("{}/{}?{}&appid={}", self.base_url, kind, params, self.api_key))
    }

    /// `url` with the API key masked, for logs.
    pub fn redact(&self, url: &str) -> String {
        if self.api_key.is_empty() {
            return url.to_owned();
        }

        url.replace(&format!("appid={}", self.api_key), "appid=***")
    }
}
