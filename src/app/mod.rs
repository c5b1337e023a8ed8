use futures::future::try_join;
use serde::de::DeserializeOwned;

use self::endpoint::{Endpoints, ResourceKind};
use self::error::WeatherError;
use self::forecast::{interpret_first_condition, interpret_forecast, CurrentWeather, ForecastItem, WeatherResponse};
use self::location::LocationQuery;
use self::provider::openweather::{RawCurrentWeather, RawForecastResponse};
use self::provider::JsonFetcher;

pub mod endpoint;
pub mod error;
pub mod forecast;
pub mod location;
pub mod provider;

pub type Temperature = f64;

/// Fetches current weather and forecast for a location and merges them into
/// one [`WeatherResponse`].
pub struct WeatherAggregator {
    endpoints: Endpoints,
    fetcher: Box<dyn JsonFetcher>,
}

impl WeatherAggregator {
    pub fn new(endpoints: Endpoints, fetcher: Box<dyn JsonFetcher>) -> Self {
        WeatherAggregator {
            endpoints,
            fetcher,
        }
    }

    /// Validates `query`, then runs both provider requests concurrently. The
    /// first failure wins and the other request is dropped.
    pub async fn get_weather(&self, query: &LocationQuery) -> Result<WeatherResponse, WeatherError> {
        query.validate()?;

        let (current_weather, forecast) = try_join(
            self.current_weather(query),
            self.load_forecast(query),
        ).await?;

        Ok(WeatherResponse {
            current_weather,
            forecast,
        })
    }

    pub async fn current_weather(&self, query: &LocationQuery) -> Result<CurrentWeather, WeatherError> {
        let raw: RawCurrentWeather = self.fetch(ResourceKind::Weather, query).await?;

        Ok(CurrentWeather {
            temperature: raw.main.temp,
            condition: interpret_first_condition(&raw.weather),
        })
    }

    pub async fn forecast(&self, query: &LocationQuery) -> Result<Vec<ForecastItem>, WeatherError> {
        query.validate()?;
        self.load_forecast(query).await
    }

    async fn load_forecast(&self, query: &LocationQuery) -> Result<Vec<ForecastItem>, WeatherError> {
        let raw: RawForecastResponse = self.fetch(ResourceKind::Forecast, query).await?;

        Ok(interpret_forecast(&raw.list))
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: ResourceKind, query: &LocationQuery) -> Result<T, WeatherError> {
        let url = self.endpoints.build(kind, query)?;
        debug!("Requesting {} from provider: {}", kind, self.endpoints.redact(&url));

        let decoded = self.fetcher
            .fetch(url)
            .await
            .and_then(|body| serde_json::from_value::<T>(body).map_err(|e| WeatherError::upstream(e.to_string())));

        if let Err(ref e) = decoded {
            error!("Provider {} request failed: {}", kind, e);
        }

        decoded
    }
}
