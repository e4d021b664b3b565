use crate::phone::Phone;

/// Conjunctive list filter. Absent criteria impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneFilter {
    brand: Option<String>,
    max_price: Option<f64>,
}

impl PhoneFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact brand match.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Price at most `max_price`.
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Build a filter from raw query-string values.
    ///
    /// Empty values are ignored. A `maxPrice` that is not a number matches
    /// nothing.
    pub fn from_query(brand: Option<&str>, max_price: Option<&str>) -> Self {
        let brand = brand.filter(|b| !b.is_empty()).map(str::to_string);
        let max_price = max_price
            .filter(|m| !m.is_empty())
            .map(|m| m.trim().parse::<f64>().unwrap_or(f64::NAN));
        Self { brand, max_price }
    }

    pub fn matches(&self, phone: &Phone) -> bool {
        if let Some(brand) = &self.brand {
            if phone.brand() != brand {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if max.is_nan() || phone.price().as_f64() > max {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Price;
    use phonestore_core::PhoneId;

    fn phone(brand: &str, price: u64) -> Phone {
        Phone::new(PhoneId::new(1), "x", brand, Price::from(price), 1)
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(PhoneFilter::new().matches(&phone("Apple", 1200)));
    }

    #[test]
    fn criteria_are_conjunctive() {
        let f = PhoneFilter::new().brand("Apple").max_price(1000.0);
        assert!(!f.matches(&phone("Apple", 1200)));
        assert!(!f.matches(&phone("Samsung", 900)));
        assert!(f.matches(&phone("Apple", 1000)));
    }

    #[test]
    fn query_values_follow_loose_rules() {
        let f = PhoneFilter::from_query(Some(""), Some(""));
        assert_eq!(f, PhoneFilter::new());

        let f = PhoneFilter::from_query(None, Some("cheap"));
        assert!(!f.matches(&phone("Apple", 1)));

        let f = PhoneFilter::from_query(None, Some(" 900 "));
        assert!(f.matches(&phone("Samsung", 900)));
    }
}
