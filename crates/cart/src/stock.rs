//! Stock rules applied when the cart and the catalog interact.
//!
//! Stock is reserved the moment a phone goes into the cart. Checkout then
//! re-checks every line against what is left before clearing the cart.

use serde::Serialize;
use phonestore_core::{PhoneId, ShopError, ShopResult};

use crate::cart::CartLine;
use crate::shop::Shop;

/// Summary of a placed order. Orders are not stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub lines: usize,
    pub units: u64,
}

impl Shop {
    /// Put `quantity` units of a phone in the cart and reserve them.
    ///
    /// Fails with [`ShopError::OutOfStock`] when the phone is unknown or has
    /// fewer than `quantity` units left. On failure nothing changes.
    pub fn add_to_cart(&mut self, phone_id: PhoneId, quantity: u64) -> ShopResult<&[CartLine]> {
        if quantity == 0 {
            return Err(ShopError::validation("quantity must be a positive integer"));
        }

        let out_of_stock = ShopError::OutOfStock { phone_id, requested: quantity };
        // Everything is checked before the first write.
        let merged = self
            .cart
            .merged_quantity(phone_id, quantity)
            .ok_or_else(|| out_of_stock.clone())?;
        let phone = self.catalog.get_mut(phone_id).map_err(|_| out_of_stock.clone())?;
        if !phone.has_stock(quantity) {
            return Err(out_of_stock);
        }
        phone.withdraw_stock(quantity)?;
        self.cart.set_quantity(phone_id, merged);

        Ok(self.cart.lines())
    }

    /// Place the order held in the cart.
    ///
    /// Every line must still point at a phone whose remaining stock covers the
    /// line's quantity; otherwise [`ShopError::InsufficientStock`] and the cart
    /// is kept. On success the cart is emptied and stock stays withdrawn.
    pub fn checkout(&mut self) -> ShopResult<OrderConfirmation> {
        if self.cart.is_empty() {
            return Err(ShopError::EmptyCart);
        }

        for line in self.cart.lines() {
            let covered = self
                .catalog
                .get(line.phone_id)
                .is_ok_and(|phone| phone.has_stock(line.quantity));
            if !covered {
                return Err(ShopError::InsufficientStock(line.phone_id));
            }
        }

        let units = self
            .cart
            .lines()
            .iter()
            .try_fold(0u64, |acc, l| acc.checked_add(l.quantity))
            .ok_or_else(|| ShopError::validation("order quantity is not representable"))?;
        let confirmation = OrderConfirmation {
            lines: self.cart.lines().len(),
            units,
        };
        self.cart.clear();

        Ok(confirmation)
    }
}
