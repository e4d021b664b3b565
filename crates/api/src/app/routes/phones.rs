use std::collections::HashMap;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use phonestore_catalog::{NewPhone, Phone, PhoneFilter, PhonePatch};
use phonestore_core::Entity;

use crate::app::body::BoundedBody;
use crate::app::errors::ApiError;
use crate::app::{dto, lock, SharedShop};

pub fn router() -> Router {
    Router::new()
        .route(
            "/phones",
            get(list_phones).post(create_phone).fallback(super::not_found),
        )
        .route(
            "/phones/:id",
            get(get_phone)
                .put(update_phone)
                .delete(delete_phone)
                .fallback(super::not_found),
        )
}

/// `GET /phones?brand=&maxPrice=`
pub async fn list_phones(
    Extension(shop): Extension<SharedShop>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Phone>> {
    let filter = PhoneFilter::from_query(
        params.get("brand").map(String::as_str),
        params.get("maxPrice").map(String::as_str),
    );
    let shop = lock(&shop);
    Json(shop.catalog().list(&filter).into_iter().cloned().collect())
}

pub async fn get_phone(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<String>,
) -> Result<Json<Phone>, ApiError> {
    let id = dto::phone_id(Some(id.as_str()));
    let shop = lock(&shop);
    Ok(Json(shop.catalog().get(id)?.clone()))
}

pub async fn create_phone(
    Extension(shop): Extension<SharedShop>,
    body: BoundedBody,
) -> Result<impl IntoResponse, ApiError> {
    let draft: NewPhone = body.json()?;

    let mut shop = lock(&shop);
    let phone = shop.catalog_mut().create(draft)?.clone();
    info!(phone_id = %phone.id(), brand = phone.brand(), "phone created");

    Ok((StatusCode::CREATED, Json(phone)))
}

pub async fn update_phone(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<String>,
    body: BoundedBody,
) -> Result<Json<Phone>, ApiError> {
    let id = dto::phone_id(Some(id.as_str()));

    let mut shop = lock(&shop);
    // An unknown phone wins over a bad body.
    shop.catalog().get(id)?;
    let patch: PhonePatch = body.json()?;
    let phone = shop.catalog_mut().update(id, patch)?.clone();
    info!(phone_id = %id, "phone updated");

    Ok(Json(phone))
}

pub async fn delete_phone(
    Extension(shop): Extension<SharedShop>,
    Path(id): Path<String>,
) -> Result<Json<Phone>, ApiError> {
    let id = dto::phone_id(Some(id.as_str()));

    let mut shop = lock(&shop);
    let removed = shop.catalog_mut().delete(id)?;
    if shop.cart().line(id).is_some() {
        warn!(phone_id = %id, "deleted phone is still referenced by the cart");
    }
    info!(phone_id = %id, "phone deleted");

    Ok(Json(removed))
}
