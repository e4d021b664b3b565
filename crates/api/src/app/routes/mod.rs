use axum::Router;

use crate::app::errors::ApiError;

pub mod cart;
pub mod checkout;
pub mod phones;

/// Router for every endpoint.
pub fn router() -> Router {
    Router::new()
        .merge(phones::router())
        .merge(cart::router())
        .merge(checkout::router())
}

/// Any unmatched method or path.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
