//! HTTP application wiring (Axum router + shared store).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response bodies
//! - `body.rs`: bounded body reading and JSON decoding
//! - `errors.rs`: the `{ "error": ... }` envelope

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{Extension, Router};
use tower::ServiceBuilder;

use phonestore_cart::Shop;

use crate::config::ServerConfig;
use crate::middleware;

pub mod body;
pub mod dto;
pub mod errors;
pub mod routes;

use body::BodyLimits;

/// The one store instance, shared by every handler.
///
/// Handlers lock it once, mutate synchronously and release it before the
/// response is written, so mutations never interleave.
pub type SharedShop = Arc<Mutex<Shop>>;

pub(crate) fn lock(shop: &SharedShop) -> MutexGuard<'_, Shop> {
    // Every store operation is all-or-nothing, so a panic elsewhere cannot
    // leave the shop half-mutated.
    shop.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build the full HTTP router over the seeded catalog (entrypoint used by `main.rs`).
pub fn build_app(config: &ServerConfig) -> Router {
    build_app_with(Shop::seeded(), config.body_limits())
}

/// Build the router over an explicit shop and body limits.
pub fn build_app_with(shop: Shop, limits: BodyLimits) -> Router {
    let shop: SharedShop = Arc::new(Mutex::new(shop));

    routes::router()
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(shop))
                .layer(Extension(limits)),
        )
}
