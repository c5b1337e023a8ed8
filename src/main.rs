extern crate actix_web;
extern crate env_logger;
#[macro_use] extern crate log;

use actix_web::{middleware, web, App, HttpServer};
use std::io;
use weather_summary::app::provider::http::AwcFetcher;
use weather_summary::app::WeatherAggregator;
use weather_summary::settings::{Settings, DEFAULT_CONFIG_PATH};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("weather_summary=info,actix_web=info"),
    ).init();

    let settings = Settings::new(DEFAULT_CONFIG_PATH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let endpoints = settings.endpoints();
    info!("Serving weather summaries on {}", settings.bind);

    HttpServer::new(move ||
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(WeatherAggregator::new(
                endpoints.clone(),
                Box::new(AwcFetcher::default()),
            )))
            .configure(weather_summary::web::configure)
    )
        .bind(settings.bind.as_str())?
        .run()
        .await
}
