use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::app::error::WeatherError;

pub mod http;
pub mod openweather;
pub mod stub;

pub type FetchResult = LocalBoxFuture<'static, Result<Value, WeatherError>>;

/// Outbound GET returning the parsed JSON body. Implementations never retry
/// and never cache.
pub trait JsonFetcher {
    fn fetch(&self, url: String) -> FetchResult;
}
