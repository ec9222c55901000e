//! Fixtures
//!
//! The storefront has no product backend; catalogs are static YAML files.
//! The bundled `storefront` catalog is compiled in, other sets are read from
//! `<base path>/catalog/<name>.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::catalog::{CatalogError, ProductCatalog};

pub mod catalog;

/// Name of the catalog set bundled with the crate.
pub const STOREFRONT_SET: &str = "storefront";

const STOREFRONT_CATALOG: &str = include_str!("../../fixtures/catalog/storefront.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Catalog validation error
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a catalog from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// catalog it describes is invalid.
    pub fn load_catalog(&self, name: &str) -> Result<ProductCatalog<'static>, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        debug!(path = %file_path.display(), "loading catalog fixture");

        catalog_from_yaml(&contents)
    }
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or the catalog is invalid.
pub fn catalog_from_yaml(contents: &str) -> Result<ProductCatalog<'static>, FixtureError> {
    let fixture: catalog::CatalogFixture = serde_norway::from_str(contents)?;

    fixture.try_into()
}

impl ProductCatalog<'static> {
    /// The bundled storefront catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture is invalid.
    pub fn storefront() -> Result<Self, FixtureError> {
        catalog_from_yaml(STOREFRONT_CATALOG)
    }
}
