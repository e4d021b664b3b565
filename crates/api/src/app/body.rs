//! Request body reading with an explicit size cap and read deadline.

use std::time::Duration;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

use phonestore_core::ShopError;

use crate::app::errors::ApiError;

/// Limits applied to every body read; installed as a request extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BodyLimits {
    pub max_bytes: usize,
    pub read_timeout: Duration,
}

impl Default for BodyLimits {
    fn default() -> Self {
        Self {
            max_bytes: 64 * 1024,
            read_timeout: Duration::from_secs(10),
        }
    }
}

/// The complete raw request body.
///
/// Decoding is left to the handler so it can decide what to check first.
#[derive(Debug, Clone, Default)]
pub struct BoundedBody(pub Vec<u8>);

#[async_trait]
impl<S> FromRequest<S> for BoundedBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let limits = req.extensions().get::<BodyLimits>().copied().unwrap_or_default();
        match tokio::time::timeout(limits.read_timeout, read_limited(req, limits.max_bytes)).await {
            Ok(result) => result.map(BoundedBody),
            Err(_) => Err(ApiError::BodyTimeout),
        }
    }
}

async fn read_limited(req: Request, limit: usize) -> Result<Vec<u8>, ApiError> {
    let declared = req
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(ApiError::BodyTooLarge { limit });
    }

    let mut body = req.into_body();
    let mut buf = Vec::with_capacity(declared.unwrap_or(0));
    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        if let Ok(data) = frame.into_data() {
            if buf.len() + data.len() > limit {
                return Err(ApiError::BodyTooLarge { limit });
            }
            buf.extend_from_slice(&data);
        }
    }
    Ok(buf)
}

impl BoundedBody {
    /// Decode the body as a JSON object into `T`.
    ///
    /// Broken JSON is [`ApiError::MalformedBody`]; well-formed JSON that is not
    /// an object, or whose fields have the wrong type, is a validation error.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let value: serde_json::Value =
            serde_json::from_slice(&self.0).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        if !value.is_object() {
            return Err(ShopError::validation("body must be a JSON object").into());
        }
        serde_json::from_value(value).map_err(|e| ShopError::validation(e.to_string()).into())
    }
}
