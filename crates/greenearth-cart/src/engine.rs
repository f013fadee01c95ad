//! Cart operations coupled to persistence.
//!
//! Every mutation on [`CartEngine`] writes the cart through its
//! [`CartStore`] and returns a fresh [`CartView`] for display. There is no
//! batching: the stored cart always matches what was last shown.

use crate::cart::Cart;
use crate::persist::CartStore;
use crate::store::KeyValueStore;

/// One displayed cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
    /// `unit_price × qty`.
    pub amount: f64,
}

/// Projection of the cart for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: f64,
}

impl CartView {
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart
                .entries()
                .map(|entry| CartLine {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    unit_price: entry.price,
                    qty: entry.qty,
                    amount: entry.amount(),
                })
                .collect(),
            total: cart.total(),
        }
    }
}

pub struct CartEngine<S> {
    cart: Cart,
    store: CartStore<S>,
}

impl<S: KeyValueStore> CartEngine<S> {
    /// Opens the engine with whatever cart `store` has persisted.
    pub fn open(store: CartStore<S>) -> Self {
        let cart = store.load();
        tracing::debug!(lines = cart.len(), "loaded persisted cart");
        Self { cart, store }
    }

    pub fn add(&mut self, id: &str, name: &str, price: f64) -> CartView {
        self.cart.add(id, name, price);
        self.commit()
    }

    pub fn increase(&mut self, id: &str) -> CartView {
        self.cart.increase(id);
        self.commit()
    }

    pub fn decrease(&mut self, id: &str) -> CartView {
        self.cart.decrease(id);
        self.commit()
    }

    pub fn remove(&mut self, id: &str) -> CartView {
        self.cart.remove(id);
        self.commit()
    }

    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from_cart(&self.cart)
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    fn commit(&mut self) -> CartView {
        self.store.save(&self.cart);
        self.view()
    }
}
