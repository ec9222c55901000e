//! Products

use std::fmt;

use jiff::civil::Date;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a new product identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Product description
    pub description: String,

    /// Date the product was added to the catalog, used for "newest" ordering
    pub date_added: Date,

    /// Image reference, opaque to the core
    pub image: String,
}

impl<'a> Product<'a> {
    /// Creates a product with an empty description and image reference.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        date_added: Date,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            description: String::new(),
            date_added,
            image: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}
