use actix_web::web;

pub mod action;

/// Registers `GET /weather`, the JSON rendering of query parse errors and the
/// JSON 404 for every other route. Expects a `Data<WeatherAggregator>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(action::query_error))
        .route("/weather", web::get().to(action::weather::handle))
        .default_service(web::to(action::not_found));
}
