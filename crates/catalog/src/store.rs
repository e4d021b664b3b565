use phonestore_core::{Entity, PhoneId, ShopError, ShopResult};

use crate::filter::PhoneFilter;
use crate::phone::{NewPhone, Phone, PhonePatch};
use crate::price::Price;

/// In-memory catalog. Keeps phones in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    phones: Vec<Phone>,
    /// Highest id ever handed out; never decreases, even across deletes.
    last_id: Option<PhoneId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the three launch phones (ids 1-3).
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (name, brand, price, stock) in [
            ("iPhone 14", "Apple", 1200u64, 10u64),
            ("Galaxy S23", "Samsung", 900, 15),
            ("Pixel 7", "Google", 800, 8),
        ] {
            let id = catalog.peek_next_id();
            catalog.insert(Phone::new(id, name, brand, Price::from(price), stock));
        }
        catalog
    }

    /// Phones matching `filter`, in insertion order.
    pub fn list(&self, filter: &PhoneFilter) -> Vec<&Phone> {
        self.phones.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn get(&self, id: PhoneId) -> ShopResult<&Phone> {
        self.phones
            .iter()
            .find(|p| p.id() == id)
            .ok_or(ShopError::PhoneNotFound(id))
    }

    pub fn get_mut(&mut self, id: PhoneId) -> ShopResult<&mut Phone> {
        self.phones
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(ShopError::PhoneNotFound(id))
    }

    /// Validate `draft`, assign the next id and append it.
    pub fn create(&mut self, draft: NewPhone) -> ShopResult<&Phone> {
        let id = self.peek_next_id();
        let phone = draft.into_phone(id)?;
        Ok(self.insert(phone))
    }

    /// Merge `patch` over the phone with `id`.
    pub fn update(&mut self, id: PhoneId, patch: PhonePatch) -> ShopResult<&Phone> {
        let phone = self.get_mut(id)?;
        patch.apply_to(phone)?;
        Ok(&*phone)
    }

    /// Remove and return the phone with `id`.
    pub fn delete(&mut self, id: PhoneId) -> ShopResult<Phone> {
        let idx = self.position(id).ok_or(ShopError::PhoneNotFound(id))?;
        Ok(self.phones.remove(idx))
    }

    fn peek_next_id(&self) -> PhoneId {
        self.last_id.map_or(PhoneId::new(1), PhoneId::next)
    }

    fn insert(&mut self, phone: Phone) -> &Phone {
        self.last_id = Some(self.last_id.map_or(phone.id(), |last| last.max(phone.id())));
        self.phones.push(phone);
        let last = self.phones.len() - 1;
        &self.phones[last]
    }

    fn position(&self, id: PhoneId) -> Option<usize> {
        self.phones.iter().position(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nokia() -> NewPhone {
        NewPhone {
            name: Some("Nokia 3310".to_string()),
            brand: Some("Nokia".to_string()),
            price: Some(Price::from(50)),
            stock: Some(100),
        }
    }

    #[test]
    fn seeded_catalog_has_three_phones() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.list(&PhoneFilter::new()).len(), 3);
        assert_eq!(catalog.get(PhoneId::new(2)).unwrap().name(), "Galaxy S23");
    }

    #[test]
    fn create_after_seed_assigns_id_4() {
        let mut catalog = Catalog::seeded();
        let phone = catalog.create(nokia()).unwrap();
        assert_eq!(phone.id(), PhoneId::new(4));
        assert_eq!(catalog.list(&PhoneFilter::new()).len(), 4);
    }

    #[test]
    fn create_on_empty_catalog_starts_at_1() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.create(nokia()).unwrap().id(), PhoneId::new(1));
    }

    #[test]
    fn ids_are_not_reused_after_deleting_the_newest() {
        let mut catalog = Catalog::seeded();
        catalog.delete(PhoneId::new(3)).unwrap();
        let phone = catalog.create(nokia()).unwrap();
        assert_eq!(phone.id(), PhoneId::new(4));
    }

    #[test]
    fn invalid_create_does_not_consume_an_id() {
        let mut catalog = Catalog::seeded();
        let bad = NewPhone { stock: None, ..nokia() };
        assert!(catalog.create(bad).is_err());
        assert_eq!(catalog.create(nokia()).unwrap().id(), PhoneId::new(4));
    }

    #[test]
    fn list_filters_conjunctively_in_insertion_order() {
        let catalog = Catalog::seeded();
        let all: Vec<_> = catalog.list(&PhoneFilter::new()).iter().map(|p| p.id().get()).collect();
        assert_eq!(all, vec![1, 2, 3]);

        let cheap = catalog.list(&PhoneFilter::new().max_price(900.0));
        assert_eq!(cheap.len(), 2);

        let apple_cheap = catalog.list(&PhoneFilter::new().brand("Apple").max_price(1000.0));
        assert!(apple_cheap.is_empty());
    }

    #[test]
    fn update_unknown_phone_is_not_found_even_with_empty_patch() {
        let mut catalog = Catalog::seeded();
        let err = catalog.update(PhoneId::new(42), PhonePatch::default()).unwrap_err();
        assert_eq!(err, ShopError::PhoneNotFound(PhoneId::new(42)));
    }

    #[test]
    fn update_merges_supplied_fields() {
        let mut catalog = Catalog::seeded();
        let patch = PhonePatch { price: Some(Price::from(1100)), ..Default::default() };
        let phone = catalog.update(PhoneId::new(1), patch).unwrap();
        assert_eq!(phone.price(), &Price::from(1100));
        assert_eq!(phone.name(), "iPhone 14");
        assert_eq!(phone.stock(), 10);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut catalog = Catalog::seeded();
        let removed = catalog.delete(PhoneId::new(1)).unwrap();
        assert_eq!(removed.name(), "iPhone 14");
        assert_eq!(catalog.get(PhoneId::new(1)).unwrap_err(), ShopError::PhoneNotFound(PhoneId::new(1)));
        assert!(catalog.delete(PhoneId::new(1)).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Create,
            DeleteNth(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![Just(Op::Create), (0usize..8).prop_map(Op::DeleteNth)]
        }

        proptest! {
            /// Property: every created id is above every id handed out before it.
            #[test]
            fn created_ids_strictly_increase(ops in prop::collection::vec(op(), 1..40)) {
                let mut catalog = Catalog::seeded();
                let mut highest = 3u64;
                for op in ops {
                    match op {
                        Op::Create => {
                            let id = catalog.create(nokia()).unwrap().id().get();
                            prop_assert!(id > highest);
                            highest = id;
                        }
                        Op::DeleteNth(n) => {
                            let ids: Vec<_> = catalog.list(&PhoneFilter::new()).iter().map(|p| p.id()).collect();
                            if let Some(id) = ids.get(n) {
                                catalog.delete(*id).unwrap();
                            }
                        }
                    }
                }
            }

            /// Property: a combined filter returns exactly the intersection of its parts.
            #[test]
            fn filters_are_conjunctive(brand in "(Apple|Samsung|Google|Nokia)", max in 0u64..1500) {
                let catalog = Catalog::seeded();
                let by_brand: Vec<_> = catalog.list(&PhoneFilter::new().brand(brand.clone())).iter().map(|p| p.id()).collect();
                let by_price: Vec<_> = catalog.list(&PhoneFilter::new().max_price(max as f64)).iter().map(|p| p.id()).collect();
                let both: Vec<_> = catalog
                    .list(&PhoneFilter::new().brand(brand).max_price(max as f64))
                    .iter()
                    .map(|p| p.id())
                    .collect();
                let expected: Vec<_> = by_brand.into_iter().filter(|id| by_price.contains(id)).collect();
                prop_assert_eq!(both, expected);
            }
        }
    }
}
