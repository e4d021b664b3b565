use axum::{extract::Extension, routing::post, Json, Router};
use tracing::info;

use crate::app::errors::ApiError;
use crate::app::{dto, lock, SharedShop};

pub fn router() -> Router {
    Router::new().route("/checkout", post(checkout).fallback(super::not_found))
}

/// `POST /checkout`: validate every line, then empty the cart.
pub async fn checkout(Extension(shop): Extension<SharedShop>) -> Result<Json<dto::MessageResponse>, ApiError> {
    let confirmation = lock(&shop).checkout()?;
    info!(lines = confirmation.lines, units = confirmation.units, "checkout complete");
    Ok(Json(dto::ORDER_PLACED))
}
