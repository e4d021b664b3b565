use serde::{Deserialize, Serialize};
use serde_json::Value;

use phonestore_core::PhoneId;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /cart`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    /// Kept raw: a `phoneId` of the wrong type names no phone, it is not a bad body.
    pub phone_id: Option<Value>,
    pub quantity: Option<u64>,
}

impl AddToCartRequest {
    /// The referenced phone, or [`PhoneId::UNASSIGNED`] unless `phoneId` is a
    /// non-negative integral number (`4` and `4.0` both name phone 4).
    pub fn phone_id(&self) -> PhoneId {
        let Some(Value::Number(n)) = &self.phone_id else {
            return PhoneId::UNASSIGNED;
        };
        n.as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
                    .map(|f| f as u64)
            })
            .map_or(PhoneId::UNASSIGNED, PhoneId::new)
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const ORDER_PLACED: MessageResponse = MessageResponse {
    message: "Order placed successfully",
};

// -------------------------
// Query / path helpers
// -------------------------

/// Parse a path or query id. Anything unparsable maps to an id no phone has,
/// so lookups fail with the ordinary not-found error.
pub fn phone_id(raw: Option<&str>) -> PhoneId {
    raw.and_then(|s| s.parse().ok()).unwrap_or(PhoneId::UNASSIGNED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_ids_become_unassigned() {
        assert_eq!(phone_id(Some("4")), PhoneId::new(4));
        assert_eq!(phone_id(Some("four")), PhoneId::UNASSIGNED);
        assert_eq!(phone_id(None), PhoneId::UNASSIGNED);
    }

    #[test]
    fn cart_request_uses_camel_case() {
        let req: AddToCartRequest =
            serde_json::from_value(serde_json::json!({"phoneId": 4, "quantity": 5})).unwrap();
        assert_eq!(req.phone_id(), PhoneId::new(4));
        assert_eq!(req.quantity, Some(5));
    }

    #[test]
    fn cart_request_phone_id_must_be_an_integral_number() {
        let id_of = |raw: Value| {
            let req: AddToCartRequest =
                serde_json::from_value(serde_json::json!({"phoneId": raw, "quantity": 1})).unwrap();
            req.phone_id()
        };
        assert_eq!(id_of(serde_json::json!(2.0)), PhoneId::new(2));
        assert_eq!(id_of(serde_json::json!("2")), PhoneId::UNASSIGNED);
        assert_eq!(id_of(serde_json::json!(1.5)), PhoneId::UNASSIGNED);
        assert_eq!(id_of(serde_json::json!(-1)), PhoneId::UNASSIGNED);
        assert_eq!(id_of(serde_json::json!(null)), PhoneId::UNASSIGNED);
        assert_eq!(id_of(serde_json::json!([1])), PhoneId::UNASSIGNED);
    }
}
