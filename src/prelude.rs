//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        CartError, CartEvent, CartLineItem, CartObserver, CartStatus, CartStore, NoopObserver,
        SharedCartStore, parse_quantity,
    },
    catalog::{CatalogError, FilterKey, LATEST_WINDOW, ProductCatalog},
    contact::{ContactError, ContactField, ContactForm, ContactSubmission, ValidationErrors},
    fixtures::{Fixture, FixtureError},
    pricing::TotalPriceError,
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
