// src/utils/errors.rs

use actix_web::{error::QueryPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::utils::types::ApiResponse;

/// Errors surfaced to HTTP clients. Rendered as an `ApiResponse` envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unavailable: {0}")]
    Unavailable(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_)     => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_)  => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }
}

impl From<QueryPayloadError> for ApiError {
    fn from(err: QueryPayloadError) -> Self {
        ApiError::InvalidQuery(err.to_string())
    }
}

/// `web::QueryConfig` error handler: every query rejection becomes a 400 envelope.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!(
        "rejected query on {} {}?{}: {}",
        req.method(),
        req.path(),
        req.query_string(),
        err
    );
    ApiError::from(err).into()
}

/// Errors raised while loading `Settings`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SERVER_PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),
}
