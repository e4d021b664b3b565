use std::collections::HashMap;

use axum::{
    extract::{Extension, Query},
    routing::get,
    Json, Router,
};
use tracing::info;

use phonestore_cart::{CartLine, PricedLine};

use crate::app::body::BoundedBody;
use crate::app::errors::ApiError;
use crate::app::{dto, lock, SharedShop};

pub fn router() -> Router {
    Router::new().route(
        "/cart",
        get(get_cart)
            .post(add_to_cart)
            .delete(remove_from_cart)
            .fallback(super::not_found),
    )
}

/// `GET /cart`: lines with `totalPrice`.
pub async fn get_cart(Extension(shop): Extension<SharedShop>) -> Result<Json<Vec<PricedLine>>, ApiError> {
    let shop = lock(&shop);
    Ok(Json(shop.priced_cart()?))
}

/// `POST /cart` `{phoneId, quantity}`: reserve stock and return the raw cart.
pub async fn add_to_cart(
    Extension(shop): Extension<SharedShop>,
    body: BoundedBody,
) -> Result<Json<Vec<CartLine>>, ApiError> {
    let req: dto::AddToCartRequest = body.json()?;
    // A missing quantity is rejected by the store like a zero one.
    let quantity = req.quantity.unwrap_or(0);
    let phone_id = req.phone_id();

    let mut shop = lock(&shop);
    let lines = shop.add_to_cart(phone_id, quantity)?.to_vec();
    info!(phone_id = %phone_id, quantity, "added to cart");

    Ok(Json(lines))
}

/// `DELETE /cart?phoneId=`: drop one line and return what is left.
pub async fn remove_from_cart(
    Extension(shop): Extension<SharedShop>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<CartLine>>, ApiError> {
    let phone_id = dto::phone_id(params.get("phoneId").map(String::as_str));

    let mut shop = lock(&shop);
    let removed = shop.remove_from_cart(phone_id)?;
    info!(phone_id = %phone_id, quantity = removed.quantity, "removed from cart");

    Ok(Json(shop.cart().lines().to_vec()))
}
