use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use phonestore_core::ShopError;

/// Everything a handler can fail with.
///
/// The `Display` text is exactly what the client sees in `{ "error": ... }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// Body is not syntactically valid JSON (or could not be read).
    #[error("Invalid JSON format")]
    MalformedBody(String),

    #[error("Request body too large")]
    BodyTooLarge { limit: usize },

    #[error("Request body timed out")]
    BodyTimeout,

    #[error("Not Found")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Shop(e) => match e {
                ShopError::Validation(_)
                | ShopError::NothingToUpdate
                | ShopError::OutOfStock { .. }
                | ShopError::InsufficientStock(_)
                | ShopError::EmptyCart => StatusCode::BAD_REQUEST,
                ShopError::PhoneNotFound(_) | ShopError::NotInCart(_) => StatusCode::NOT_FOUND,
                ShopError::Integrity(_) => StatusCode::CONFLICT,
            },
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::BodyTimeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Shop(e) => e.detail(),
            ApiError::MalformedBody(msg) => msg.clone(),
            ApiError::BodyTooLarge { limit } => format!("body exceeds {limit} bytes"),
            ApiError::BodyTimeout => "body not received in time".to_string(),
            ApiError::RouteNotFound => "no route".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), detail = %self.detail(), "request rejected: {self}");
        json_error(status, self.to_string())
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
