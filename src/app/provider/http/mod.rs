use awc::Client;
use futures::FutureExt;
use serde_json::Value;

use crate::app::error::WeatherError;
use crate::app::provider::{FetchResult, JsonFetcher};

mod test;

/// [`JsonFetcher`] over an actix `awc` client. The client is not `Send`, so one
/// fetcher is built per worker.
pub struct AwcFetcher {
    client: Client,
}

impl AwcFetcher {
    pub fn new(client: Client) -> Self {
        AwcFetcher { client }
    }
}

impl Default for AwcFetcher {
    fn default() -> Self {
        AwcFetcher::new(Client::default())
    }
}

impl JsonFetcher for AwcFetcher {
    fn fetch(&self, url: String) -> FetchResult {
        let request = self.client.get(url);

        async move {
            let mut response = request
                .send()
                .await
                .map_err(|e| WeatherError::upstream(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(WeatherError::upstream(format!("Request failed with status code {}", status.as_u16())));
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| WeatherError::upstream(e.to_string()))
        }
            .boxed_local()
    }
}
