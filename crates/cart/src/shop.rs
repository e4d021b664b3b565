use phonestore_catalog::Catalog;
use phonestore_core::{PhoneId, ShopError, ShopResult};

use crate::cart::{Cart, CartLine, PricedLine};

/// The store object: owns the catalog and the single shared cart.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    pub(crate) catalog: Catalog,
    pub(crate) cart: Cart,
}

impl Shop {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Shop over the seeded launch catalog with an empty cart.
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Direct catalog access. Deleting a phone here does not touch the cart;
    /// see [`Shop::priced_cart`] for how dangling lines surface.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart lines with `totalPrice = price * quantity`.
    ///
    /// Fails with [`ShopError::Integrity`] on the first line whose phone no
    /// longer exists.
    pub fn priced_cart(&self) -> ShopResult<Vec<PricedLine>> {
        self.cart
            .lines()
            .iter()
            .map(|line| {
                let phone = self
                    .catalog
                    .get(line.phone_id)
                    .map_err(|_| ShopError::Integrity(line.phone_id))?;
                Ok(PricedLine {
                    phone_id: line.phone_id,
                    quantity: line.quantity,
                    total_price: phone.price().times(line.quantity),
                })
            })
            .collect()
    }

    /// Drop a cart line. Reserved stock is not handed back.
    pub fn remove_from_cart(&mut self, phone_id: PhoneId) -> ShopResult<CartLine> {
        self.cart.remove(phone_id)
    }
}
