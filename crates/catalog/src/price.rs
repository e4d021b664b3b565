use serde::{Deserialize, Serialize};
use serde_json::Number;

use phonestore_core::ValueObject;

/// Unit price of a phone.
///
/// Keeps the JSON number exactly as the client sent it, so `1200` comes back
/// as `1200` and `19.99` as `19.99`. Always finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Number", into = "Number")]
pub struct Price(Number);

impl ValueObject for Price {}

impl Price {
    pub fn as_f64(&self) -> f64 {
        // Every finite JSON number converts.
        self.0.as_f64().unwrap_or(f64::NAN)
    }

    pub fn is_zero(&self) -> bool {
        self.as_f64() == 0.0
    }

    /// Price of `quantity` units.
    ///
    /// Integral prices multiply exactly; otherwise the product is a float.
    /// `None` when the product is not representable (serialized as `null`).
    pub fn times(&self, quantity: u64) -> Option<Number> {
        if let Some(unit) = self.0.as_u64() {
            if let Some(total) = unit.checked_mul(quantity) {
                return Some(Number::from(total));
            }
        }
        Number::from_f64(self.as_f64() * quantity as f64)
    }
}

impl TryFrom<Number> for Price {
    type Error = String;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value.as_f64() {
            Some(v) if v.is_finite() && v >= 0.0 => Ok(Self(value)),
            _ => Err(format!("price must be a non-negative number, got {value}")),
        }
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(Number::from(value))
    }
}

impl From<Price> for Number {
    fn from(value: Price) -> Self {
        value.0
    }
}
