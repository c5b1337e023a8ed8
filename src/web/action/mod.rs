use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpRequest, HttpResponse, ResponseError};

use crate::app::error::WeatherError;

pub mod weather;

/// Error body shared by every non-2xx response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: String) -> Self {
        ErrorResponse {
            message,
            error: status.canonical_reason().unwrap_or("Error").to_owned(),
            status_code: status.as_u16(),
        }
    }
}

pub fn error_response(status: StatusCode, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(status, message))
}

#[derive(Debug, Fail)]
pub enum RequestError {
    #[fail(display = "{}", message)]
    InvalidParameter {
        message: String,
    },
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        error_response(self.status_code(), self.to_string())
    }
}

impl ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::InvalidLocation { .. } => StatusCode::NOT_FOUND,
            WeatherError::UpstreamFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_response(self.status_code(), self.to_string())
    }
}

pub fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let response = error_response(StatusCode::BAD_REQUEST, err.to_string());

    InternalError::from_response(err, response).into()
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, format!("Cannot {} {}", req.method(), req.path()))
}
