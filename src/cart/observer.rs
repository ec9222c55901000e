//! Cart Observer

use crate::{cart::CartLineItem, products::ProductId};

/// Whole-cart lifecycle state, driven purely by the number of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartStatus {
    /// No line items.
    Empty,

    /// At least one line item.
    NonEmpty,
}

/// A mutation that was applied to a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added, either as a new line or merged into an existing one.
    Added {
        /// Product identifier
        id: ProductId,
        /// Quantity of the line after the add
        quantity: u32,
    },

    /// A line's quantity was set to an absolute value.
    QuantityUpdated {
        /// Product identifier
        id: ProductId,
        /// New quantity of the line
        quantity: u32,
    },

    /// A line was removed.
    Removed {
        /// Product identifier
        id: ProductId,
    },

    /// Every line was removed at once.
    Cleared,
}

/// Observer for cart state changes.
///
/// The store calls [`CartObserver::on_change`] after every mutation with the
/// full item snapshot, so a presentation layer can re-render from it without
/// holding a reference into the store. No-op operations (removing an unknown
/// id, for example) are not reported.
pub trait CartObserver {
    /// Called after a mutation with the resulting line items, in cart order.
    fn on_change(&mut self, event: CartEvent, items: &[CartLineItem<'_>]);

    /// Called when the cart moves between [`CartStatus::Empty`] and [`CartStatus::NonEmpty`].
    fn on_status_change(&mut self, _from: CartStatus, _to: CartStatus) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_change(&mut self, _event: CartEvent, _items: &[CartLineItem<'_>]) {}
}
