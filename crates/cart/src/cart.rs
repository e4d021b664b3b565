use serde::Serialize;
use serde_json::Number;

use phonestore_core::{PhoneId, ShopError, ShopResult};

/// One cart entry: a weak reference to a phone plus how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub phone_id: PhoneId,
    pub quantity: u64,
}

/// A cart line with its price resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub phone_id: PhoneId,
    pub quantity: u64,
    /// `None` only if the product overflows; serialized as `null`.
    pub total_price: Option<Number>,
}

/// Ordered list of cart lines, at most one per phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, phone_id: PhoneId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.phone_id == phone_id)
    }

    /// Quantity the line for `phone_id` would hold after adding `quantity`.
    ///
    /// `None` if the total is not representable.
    pub fn merged_quantity(&self, phone_id: PhoneId, quantity: u64) -> Option<u64> {
        match self.line(phone_id) {
            Some(line) => line.quantity.checked_add(quantity),
            None => Some(quantity),
        }
    }

    /// Set the line for `phone_id` to `quantity`, appending it if absent.
    ///
    /// Stock is not checked here; callers go through [`Shop::add_to_cart`](crate::Shop::add_to_cart).
    pub(crate) fn set_quantity(&mut self, phone_id: PhoneId, quantity: u64) {
        match self.lines.iter_mut().find(|l| l.phone_id == phone_id) {
            Some(line) => line.quantity = quantity,
            None => self.lines.push(CartLine { phone_id, quantity }),
        }
    }

    /// Drop the line for `phone_id` and return it.
    pub fn remove(&mut self, phone_id: PhoneId) -> ShopResult<CartLine> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.phone_id == phone_id)
            .ok_or(ShopError::NotInCart(phone_id))?;
        Ok(self.lines.remove(idx))
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
