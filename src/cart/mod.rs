//! Cart
//!
//! An in-memory shopping cart. Line items are keyed by product id, keep their
//! insertion order, and always carry a quantity of at least one: any update
//! that would take a line below one removes it instead.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::{TotalPriceError, line_total, total_price},
    products::{Product, ProductId},
};

pub mod observer;
pub mod shared;

pub use observer::{CartEvent, CartObserver, CartStatus, NoopObserver};
pub use shared::SharedCartStore;

/// Errors related to cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The quantity is not a whole number, or does not fit a line quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The product's currency differs from the cart currency.
    #[error("Product {product} has currency {actual}, but cart has currency {expected}")]
    CurrencyMismatch {
        /// Product identifier
        product: ProductId,
        /// Cart currency code
        expected: &'static str,
        /// Product currency code
        actual: &'static str,
    },

    /// The product has a negative price.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// A product entry in the cart.
///
/// Name and price are copied from the product when it is first added; later
/// changes to the catalog do not affect lines already in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem<'a> {
    id: ProductId,
    name: String,
    price: Money<'a, Currency>,
    quantity: u32,
}

impl<'a> CartLineItem<'a> {
    fn from_product(product: &Product<'a>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Returns the product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name captured at add-time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price captured at add-time.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns `price * quantity` for this line.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the result does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(&self.price, self.quantity)
    }
}

/// Cart store.
///
/// Owns the cart line items. All mutation goes through the store's methods,
/// and each one reports the resulting state to the store's [`CartObserver`].
#[derive(Debug)]
pub struct CartStore<'a, O: CartObserver = NoopObserver> {
    items: Vec<CartLineItem<'a>>,
    currency: &'a Currency,
    observer: O,
}

impl<'a> CartStore<'a> {
    /// Create a new, empty cart in the given currency.
    #[must_use]
    pub fn new(currency: &'a Currency) -> Self {
        Self::with_observer(currency, NoopObserver)
    }
}

impl<'a, O: CartObserver> CartStore<'a, O> {
    /// Create a new, empty cart that reports changes to `observer`.
    pub fn with_observer(currency: &'a Currency, observer: O) -> Self {
        Self {
            items: Vec::new(),
            currency,
            observer,
        }
    }

    /// Add one unit of a product to the cart, returning the line's new quantity.
    ///
    /// If the product is already in the cart its quantity is incremented,
    /// otherwise a new line with quantity one is appended.
    ///
    /// # Errors
    ///
    /// The cart is left unchanged and an error is returned if:
    ///
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CartError::NegativePrice`]: the product has a negative price.
    /// - [`CartError::InvalidQuantity`]: the line is already at the maximum quantity.
    pub fn add(&mut self, product: &Product<'a>) -> Result<u32, CartError> {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch {
                product: product.id,
                expected: self.currency.iso_alpha_code,
                actual: product_currency.iso_alpha_code,
            });
        }

        if product.price.to_minor_units() < 0 {
            return Err(CartError::NegativePrice(product.id));
        }

        let before = self.status();

        let quantity = if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id)
        {
            item.quantity = item
                .quantity
                .checked_add(1)
                .ok_or_else(|| CartError::InvalidQuantity(format!("{} + 1", item.quantity)))?;

            item.quantity
        } else {
            self.items.push(CartLineItem::from_product(product));

            1
        };

        debug!(product = %product.id, quantity, "added product to cart");

        self.notify(
            before,
            CartEvent::Added {
                id: product.id,
                quantity,
            },
        );

        Ok(quantity)
    }

    /// Set the quantity of a line to an absolute value.
    ///
    /// A quantity below one removes the line, exactly like [`CartStore::remove_item`].
    /// Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if the quantity does not fit a line
    /// quantity. The cart is left unchanged.
    pub fn update_quantity(&mut self, id: ProductId, new_quantity: i64) -> Result<(), CartError> {
        if new_quantity < 1 {
            self.remove_item(id);

            return Ok(());
        }

        let quantity = u32::try_from(new_quantity)
            .map_err(|_err| CartError::InvalidQuantity(new_quantity.to_string()))?;

        let before = self.status();

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(product = %id, "ignoring quantity update for product not in cart");

            return Ok(());
        };

        item.quantity = quantity;

        debug!(product = %id, quantity, "updated cart quantity");

        self.notify(before, CartEvent::QuantityUpdated { id, quantity });

        Ok(())
    }

    /// Increase a line's quantity by one. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if the line is already at the maximum quantity.
    pub fn increment(&mut self, id: ProductId) -> Result<(), CartError> {
        match self.quantity(id) {
            Some(quantity) => self.update_quantity(id, i64::from(quantity) + 1),
            None => Ok(()),
        }
    }

    /// Decrease a line's quantity by one, removing it when it reaches zero.
    /// Unknown ids are ignored.
    pub fn decrement(&mut self, id: ProductId) {
        if let Some(quantity) = self.quantity(id) {
            if quantity > 1 {
                self.set_quantity(id, quantity - 1);
            } else {
                self.remove_item(id);
            }
        }
    }

    /// Remove a line from the cart. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: ProductId) {
        let before = self.status();
        let len = self.items.len();

        self.items.retain(|item| item.id != id);

        if self.items.len() == len {
            debug!(product = %id, "ignoring removal of product not in cart");

            return;
        }

        debug!(product = %id, "removed product from cart");

        self.notify(before, CartEvent::Removed { id });
    }

    /// Remove every line from the cart.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let before = self.status();

        self.items.clear();

        debug!("cleared cart");

        self.notify(before, CartEvent::Cleared);
    }

    /// Calculate the total of the cart, recomputed from the current lines.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the total does not fit in minor units.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.items, self.currency)
    }

    /// Number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of the quantities of every line.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Cart lines, in the order they were first added.
    pub fn items(&self) -> &[CartLineItem<'a>] {
        &self.items
    }

    /// Get the line for a product, if it is in the cart.
    pub fn line(&self, id: ProductId) -> Option<&CartLineItem<'a>> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Get the quantity of a product, if it is in the cart.
    pub fn quantity(&self, id: ProductId) -> Option<u32> {
        self.line(id).map(CartLineItem::quantity)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whole-cart state.
    pub fn status(&self) -> CartStatus {
        if self.items.is_empty() {
            CartStatus::Empty
        } else {
            CartStatus::NonEmpty
        }
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Get the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        let before = self.status();

        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;

            debug!(product = %id, quantity, "updated cart quantity");

            self.notify(before, CartEvent::QuantityUpdated { id, quantity });
        }
    }

    fn notify(&mut self, before: CartStatus, event: CartEvent) {
        self.observer.on_change(event, &self.items);

        let after = self.status();

        if before != after {
            self.observer.on_status_change(before, after);
        }
    }
}

/// Parse a quantity typed by a user.
///
/// Only whole numbers are accepted; fractional input such as `"1.5"` is
/// rejected rather than rounded. Negative and zero values are valid here and
/// remove the line when passed to [`CartStore::update_quantity`].
///
/// # Errors
///
/// Returns [`CartError::InvalidQuantity`] if the input is not a whole number.
pub fn parse_quantity(input: &str) -> Result<i64, CartError> {
    let trimmed = input.trim();

    trimmed
        .parse::<i64>()
        .map_err(|_err| CartError::InvalidQuantity(trimmed.to_string()))
}
