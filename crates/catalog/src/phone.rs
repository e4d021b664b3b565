use serde::{Deserialize, Serialize};

use phonestore_core::{Entity, PhoneId, ShopError, ShopResult};

use crate::price::Price;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phone {
    id: PhoneId,
    name: String,
    brand: String,
    price: Price,
    stock: u64,
}

impl Phone {
    pub fn new(id: PhoneId, name: impl Into<String>, brand: impl Into<String>, price: Price, stock: u64) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            price,
            stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn has_stock(&self, quantity: u64) -> bool {
        self.stock >= quantity
    }

    /// Take `quantity` units out of stock.
    pub fn withdraw_stock(&mut self, quantity: u64) -> ShopResult<()> {
        self.stock = self.stock.checked_sub(quantity).ok_or(ShopError::OutOfStock {
            phone_id: self.id,
            requested: quantity,
        })?;
        Ok(())
    }

    /// Shallow merge: every supplied field replaces the current one.
    fn apply(&mut self, patch: PhonePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

impl Entity for Phone {
    type Id = PhoneId;

    fn id(&self) -> PhoneId {
        self.id
    }
}

/// Fields for a new phone, as submitted.
///
/// Every field must be present and truthy: an empty string, a zero price and
/// a zero stock all count as missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewPhone {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<u64>,
}

impl NewPhone {
    pub(crate) fn into_phone(self, id: PhoneId) -> ShopResult<Phone> {
        let name = self.name.filter(|s| !s.is_empty());
        let brand = self.brand.filter(|s| !s.is_empty());
        let price = self.price.filter(|p| !p.is_zero());
        let stock = self.stock.filter(|s| *s != 0);

        match (name, brand, price, stock) {
            (Some(name), Some(brand), Some(price), Some(stock)) => {
                Ok(Phone::new(id, name, brand, price, stock))
            }
            _ => Err(ShopError::validation("name, brand, price and stock are required")),
        }
    }
}

/// Partial update of a phone. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PhonePatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<Price>,
    pub stock: Option<u64>,
}

impl PhonePatch {
    /// Whether at least one supplied field is truthy.
    pub fn has_effect(&self) -> bool {
        self.name.as_deref().is_some_and(|s| !s.is_empty())
            || self.brand.as_deref().is_some_and(|s| !s.is_empty())
            || self.price.as_ref().is_some_and(|p| !p.is_zero())
            || self.stock.is_some_and(|s| s != 0)
    }

    pub(crate) fn apply_to(self, phone: &mut Phone) -> ShopResult<()> {
        if !self.has_effect() {
            return Err(ShopError::NothingToUpdate);
        }
        phone.apply(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPhone {
        NewPhone {
            name: Some("Nokia 3310".to_string()),
            brand: Some("Nokia".to_string()),
            price: Some(Price::from(50)),
            stock: Some(100),
        }
    }

    #[test]
    fn complete_draft_builds_a_phone() {
        let phone = draft().into_phone(PhoneId::new(4)).unwrap();
        assert_eq!(phone.id(), PhoneId::new(4));
        assert_eq!(phone.brand(), "Nokia");
        assert_eq!(phone.stock(), 100);
    }

    #[test]
    fn zero_stock_counts_as_missing() {
        let d = NewPhone { stock: Some(0), ..draft() };
        assert!(matches!(d.into_phone(PhoneId::new(1)), Err(ShopError::Validation(_))));
    }

    #[test]
    fn zero_price_counts_as_missing() {
        let d = NewPhone { price: Some(Price::from(0)), ..draft() };
        assert!(matches!(d.into_phone(PhoneId::new(1)), Err(ShopError::Validation(_))));
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let d = NewPhone { name: Some(String::new()), ..draft() };
        assert!(d.into_phone(PhoneId::new(1)).is_err());
    }

    #[test]
    fn patch_of_only_falsy_fields_is_rejected() {
        let mut phone = draft().into_phone(PhoneId::new(1)).unwrap();
        let patch = PhonePatch { stock: Some(0), name: Some(String::new()), ..Default::default() };
        assert_eq!(patch.apply_to(&mut phone), Err(ShopError::NothingToUpdate));
        assert_eq!(phone.stock(), 100);
    }

    #[test]
    fn falsy_field_is_still_merged_next_to_a_truthy_one() {
        let mut phone = draft().into_phone(PhoneId::new(1)).unwrap();
        let patch = PhonePatch {
            name: Some("Nokia 3310 (2017)".to_string()),
            stock: Some(0),
            ..Default::default()
        };
        patch.apply_to(&mut phone).unwrap();
        assert_eq!(phone.name(), "Nokia 3310 (2017)");
        assert_eq!(phone.stock(), 0);
        assert_eq!(phone.brand(), "Nokia");
    }

    #[test]
    fn withdraw_beyond_stock_leaves_stock_alone() {
        let mut phone = draft().into_phone(PhoneId::new(1)).unwrap();
        assert!(phone.withdraw_stock(101).is_err());
        assert_eq!(phone.stock(), 100);
        phone.withdraw_stock(100).unwrap();
        assert_eq!(phone.stock(), 0);
    }

    #[test]
    fn patch_ignores_unknown_keys_including_id() {
        let patch: PhonePatch = serde_json::from_value(serde_json::json!({
            "id": 99,
            "color": "blue",
            "price": 60
        }))
        .unwrap();
        assert_eq!(patch.price, Some(Price::from(60)));
        assert!(patch.has_effect());
    }
}
