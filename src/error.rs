use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use leptos::logging;
use serde::Serialize;
use thiserror::Error;

use crate::db::StoreError;

/// Every failure an API handler can report. Rendered as `{"message": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Product not found")]
    NotFound,

    #[error("Route not found")]
    UnknownRoute,

    #[error("Review validation failed: missing {}", .0.join(", "))]
    ValidationMissing(Vec<&'static str>),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::UnknownRoute => StatusCode::NOT_FOUND,
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationMissing(_) | ApiError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            logging::error!("[API] {}", self);
        } else {
            logging::log!("[API] {}: {}", status, self);
        }
        HttpResponse::build(status).json(ErrorBody {
            message: self.to_string(),
        })
    }
}
