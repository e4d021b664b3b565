//! Phone catalog: the set of items a customer can browse and put in the cart.
//!
//! Pure in-memory domain logic (no IO, no HTTP). The [`Catalog`] owns every
//! [`Phone`]; other crates only hold [`PhoneId`](phonestore_core::PhoneId)
//! references into it.

pub mod filter;
pub mod phone;
pub mod price;
pub mod store;

pub use filter::PhoneFilter;
pub use phone::{NewPhone, Phone, PhonePatch};
pub use price::Price;
pub use store::Catalog;
