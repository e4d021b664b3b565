//! The shared cart and the stock rules tying it to the catalog.
//!
//! [`Shop`] is the single store object owning both collections. It is created
//! at process start and handed to the HTTP layer; nothing is persisted.

pub mod cart;
pub mod shop;
pub mod stock;

pub use cart::{Cart, CartLine, PricedLine};
pub use shop::Shop;
pub use stock::OrderConfirmation;
