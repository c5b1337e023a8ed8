#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;
use futures::channel::oneshot;
use futures::future::{self, Shared};
use futures::FutureExt;
use serde_json::{json, Value};

use crate::app::error::WeatherError;
use crate::app::provider::{FetchResult, JsonFetcher};

/// How the stub answers one resource kind.
#[derive(Clone)]
pub enum Reply {
    Ready(Result<Value, WeatherError>),
    /// Never resolves.
    Pending,
    /// Resolves once the gate sender fires or is dropped.
    Gated(Result<Value, WeatherError>),
}

/// Answers `/weather` and `/forecast` URLs with canned replies and records
/// every URL it was asked for.
pub struct FetcherStub {
    weather: Reply,
    forecast: Reply,
    gate: Shared<oneshot::Receiver<()>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FetcherStub {
    pub fn new(weather: Result<Value, WeatherError>, forecast: Result<Value, WeatherError>) -> Self {
        FetcherStub::with_replies(Reply::Ready(weather), Reply::Ready(forecast)).0
    }

    pub fn with_replies(weather: Reply, forecast: Reply) -> (Self, oneshot::Sender<()>) {
        let (open, gate) = oneshot::channel();
        let stub = FetcherStub {
            weather,
            forecast,
            gate: gate.shared(),
            calls: Rc::new(RefCell::new(Vec::new())),
        };

        (stub, open)
    }

    pub fn clear_sky() -> Self {
        FetcherStub::new(Ok(current_weather_body()), Ok(forecast_body()))
    }

    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        self.calls.clone()
    }
}

impl JsonFetcher for FetcherStub {
    fn fetch(&self, url: String) -> FetchResult {
        let reply = if url.contains("/forecast?") {
            self.forecast.clone()
        } else {
            self.weather.clone()
        };
        self.calls.borrow_mut().push(url);

        match reply {
            Reply::Ready(result) => future::ready(result).boxed_local(),
            Reply::Pending => future::pending().boxed_local(),
            Reply::Gated(result) => {
                let gate = self.gate.clone();
                async move {
                    let _ = gate.await;
                    result
                }
                    .boxed_local()
            }
        }
    }
}

pub fn current_weather_body() -> Value {
    json!({"main": {"temp": 25}, "weather": [{"main": "Clear"}]})
}

pub fn forecast_body() -> Value {
    json!({
        "list": [{
            "dt_txt": "2023-01-01T15:00:00.000Z",
            "main": {"temp": 28},
            "weather": [{"main": "Clear"}],
            "dt": 1672585200
        }]
    })
}
