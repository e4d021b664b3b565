//! Domain error model.

use thiserror::Error;

use crate::id::PhoneId;

/// Result type used across the store crates.
pub type ShopResult<T> = Result<T, ShopError>;

/// Domain-level error.
///
/// Every store operation is all-or-nothing: when one of these is returned the
/// catalog and cart are exactly as they were before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Input fields were missing or unusable.
    #[error("Invalid data")]
    Validation(String),

    /// A partial update carried no usable field.
    #[error("No fields to update")]
    NothingToUpdate,

    #[error("Phone not found")]
    PhoneNotFound(PhoneId),

    #[error("Item not in cart")]
    NotInCart(PhoneId),

    /// Add-to-cart asked for more than the phone has left (or the phone is unknown).
    #[error("Not enough stock")]
    OutOfStock { phone_id: PhoneId, requested: u64 },

    /// Checkout found a line that can no longer be fulfilled.
    #[error("Not enough stock for checkout")]
    InsufficientStock(PhoneId),

    #[error("Cart is empty")]
    EmptyCart,

    /// A cart line points at a phone that has since been deleted.
    #[error("Cart references a phone that no longer exists")]
    Integrity(PhoneId),
}

impl ShopError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Detail for logs; the `Display` text is the client-facing message.
    pub fn detail(&self) -> String {
        match self {
            ShopError::Validation(msg) => msg.clone(),
            ShopError::NothingToUpdate => "no truthy field in update".to_string(),
            ShopError::PhoneNotFound(id) => format!("phone {id} not found"),
            ShopError::NotInCart(id) => format!("phone {id} not in cart"),
            ShopError::OutOfStock { phone_id, requested } => {
                format!("phone {phone_id} cannot supply {requested} units")
            }
            ShopError::InsufficientStock(id) => format!("phone {id} cannot cover its cart line"),
            ShopError::EmptyCart => "checkout with empty cart".to_string(),
            ShopError::Integrity(id) => format!("cart line references deleted phone {id}"),
        }
    }
}
