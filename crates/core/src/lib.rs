//! `phonestore-core` — domain building blocks shared by the catalog and cart.
//!
//! This crate contains **pure domain** primitives (no HTTP, no IO).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{ShopError, ShopResult};
pub use id::PhoneId;
pub use value_object::ValueObject;
