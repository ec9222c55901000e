//! Storefront
//!
//! The core of a small mobile storefront: an in-memory shopping cart and the
//! product list views derived from a static catalog. Screens, navigation and
//! animation live in the presentation layer, which talks to this crate
//! through [`cart::CartStore`] and [`catalog::ProductCatalog`].

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod fixtures;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod utils;
