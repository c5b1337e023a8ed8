use actix_web::{web, HttpResponse};

use crate::app::location::LocationQuery;
use crate::app::WeatherAggregator;
use crate::web::action::RequestError;

pub async fn handle(
    query: web::Query<LocationQuery>,
    aggregator: web::Data<WeatherAggregator>,
) -> Result<HttpResponse, actix_web::Error> {
    let query = query.into_inner();
    check_coordinates(&query)?;

    let weather = aggregator.get_weather(&query).await?;
    info!("Weather for {:?}: {} forecast entries", query, weather.forecast.len());

    Ok(HttpResponse::Ok().json(weather))
}

fn check_coordinates(query: &LocationQuery) -> Result<(), RequestError> {
    if let Some(lat) = query.lat {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(RequestError::InvalidParameter { message: String::from("lat must be a latitude string or number") });
        }
    }

    if let Some(lon) = query.lon {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(RequestError::InvalidParameter { message: String::from("lon must be a longitude string or number") });
        }
    }

    Ok(())
}
