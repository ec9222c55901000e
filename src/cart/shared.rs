//! Shared Cart

use std::sync::Arc;

use parking_lot::Mutex;
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{CartError, CartLineItem, CartObserver, CartStore, NoopObserver},
    pricing::TotalPriceError,
    products::{Product, ProductId},
};

/// A cart store that can be shared between threads.
///
/// Every operation takes the lock for its whole duration, so callers see the
/// same sequential behaviour as a single owned [`CartStore`].
#[derive(Debug)]
pub struct SharedCartStore<'a, O: CartObserver = NoopObserver> {
    inner: Arc<Mutex<CartStore<'a, O>>>,
}

impl<O: CartObserver> Clone for SharedCartStore<'_, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'a, O: CartObserver> From<CartStore<'a, O>> for SharedCartStore<'a, O> {
    fn from(store: CartStore<'a, O>) -> Self {
        Self::new(store)
    }
}

impl<'a, O: CartObserver> SharedCartStore<'a, O> {
    /// Wrap a cart store for shared access.
    pub fn new(store: CartStore<'a, O>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// See [`CartStore::add`].
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product cannot be added.
    pub fn add(&self, product: &Product<'a>) -> Result<u32, CartError> {
        self.inner.lock().add(product)
    }

    /// See [`CartStore::update_quantity`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if the quantity does not fit a line quantity.
    pub fn update_quantity(&self, id: ProductId, new_quantity: i64) -> Result<(), CartError> {
        self.inner.lock().update_quantity(id, new_quantity)
    }

    /// See [`CartStore::remove_item`].
    pub fn remove_item(&self, id: ProductId) {
        self.inner.lock().remove_item(id);
    }

    /// See [`CartStore::total`].
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the total does not fit in minor units.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        self.inner.lock().total()
    }

    /// See [`CartStore::item_count`].
    pub fn item_count(&self) -> usize {
        self.inner.lock().item_count()
    }

    /// A copy of the current cart lines.
    pub fn items(&self) -> Vec<CartLineItem<'a>> {
        self.inner.lock().items().to_vec()
    }

    /// Run several operations against the store under a single lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut CartStore<'a, O>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use jiff::civil::date;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn concurrent_adds_merge_into_one_line() -> TestResult {
        let shared = SharedCartStore::new(CartStore::new(USD));
        let price = Money::from_minor(129_999, USD);
        let product = Product::new(1, "Laptop Pro", price, date(2024, 3, 15));

        thread::scope(|scope| {
            for _ in 0..8 {
                let shared = shared.clone();
                let product = &product;

                scope.spawn(move || {
                    for _ in 0..25 {
                        _ = shared.add(product);
                    }
                });
            }
        });

        let items = shared.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(CartLineItem::quantity), Some(200));
        assert_eq!(shared.total()?, Money::from_minor(129_999 * 200, USD));

        Ok(())
    }

    #[test]
    fn with_runs_under_one_lock() -> TestResult {
        let shared = SharedCartStore::from(CartStore::new(USD));
        let price = Money::from_minor(89_999, USD);
        let product = Product::new(4, "Smartphone", price, date(2024, 3, 22));

        let count = shared.with(|store| -> Result<usize, CartError> {
            store.add(&product)?;
            store.update_quantity(product.id, 3)?;

            Ok(store.item_count())
        })?;

        assert_eq!(count, 1);

        shared.update_quantity(product.id, 0)?;
        assert_eq!(shared.item_count(), 0);

        Ok(())
    }
}
