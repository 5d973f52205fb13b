//! Error types for the scheduling service.
//!
//! Graph-level conflicts (cycles, dangling dependencies, due-date overruns)
//! are not errors: they are recovered inside the engine and reported as
//! warnings in an otherwise-successful response. The only error surfaces are
//! an unreadable payload and missing credentials; validation failures carry
//! their own structured 400 body (see `handlers::response`).

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Error type for API operations (converts to HTTP responses).
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be deserialized into the wire contract
    /// (invalid JSON, fractional hours, wrong field types).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Bearer auth is required and the token is missing or malformed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }))
    }
}
