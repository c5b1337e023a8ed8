use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};

use crate::app::endpoint::Endpoints;

pub const DEFAULT_CONFIG_PATH: &str = "cfg/config";
pub const DEFAULT_BIND: &str = "127.0.0.1:8088";
const ENV_PREFIX: &str = "OPEN_WEATHER";

/// Process settings. Read from `cfg/config.json` when present, then from
/// `OPEN_WEATHER_*` environment variables (`OPEN_WEATHER_API_KEY` and so on).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind: String,
    pub base_url: String,
    pub api_key: String,
}

impl Settings {
    pub fn new(config_path: &str) -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(config_path).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("bind", DEFAULT_BIND)?
            .set_default("base_url", Endpoints::DEFAULT_BASE_URL)?
            .build()?
            .try_deserialize()
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.base_url, self.api_key.clone())
    }
}
