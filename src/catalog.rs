//! Catalog
//!
//! A fixed set of products and the ordered views derived from it.

use std::fmt;

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::products::{Product, ProductId};

/// Number of products shown by [`FilterKey::Latest`].
pub const LATEST_WINDOW: usize = 2;

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product's currency differs from the catalog currency.
    #[error("Product {product} has currency {actual}, but catalog has currency {expected}")]
    CurrencyMismatch {
        /// Product identifier
        product: ProductId,
        /// Catalog currency code
        expected: &'static str,
        /// Product currency code
        actual: &'static str,
    },

    /// A product has a negative price.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// Selects which view of the catalog to show.
///
/// Supplied by navigation as a string parameter: `"newest"` and `"latest"`
/// select their views, anything else (including no parameter) shows everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// Every product, in catalog order.
    #[default]
    All,

    /// Every product, most recently added first.
    Newest,

    /// The [`LATEST_WINDOW`] most recently added products.
    Latest,
}

impl FilterKey {
    /// Map an optional navigation parameter to a filter.
    pub fn from_param(param: Option<&str>) -> Self {
        param.map_or(Self::All, Self::from)
    }

    /// The navigation parameter value for this filter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Newest => "newest",
            Self::Latest => "latest",
        }
    }

    /// Heading shown above the product list.
    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Newest => "Newest Products",
            Self::Latest => "Latest Arrivals",
        }
    }
}

impl From<&str> for FilterKey {
    fn from(param: &str) -> Self {
        match param {
            "newest" => Self::Newest,
            "latest" => Self::Latest,
            _ => Self::All,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product catalog
#[derive(Debug, Clone)]
pub struct ProductCatalog<'a> {
    products: Vec<Product<'a>>,
    index: FxHashMap<ProductId, usize>,
    categories: Vec<String>,
    currency: &'a Currency,
}

impl<'a> ProductCatalog<'a> {
    /// Create a catalog from products, keeping their order.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: two products share an identifier.
    /// - [`CatalogError::CurrencyMismatch`]: a product is priced in another currency.
    /// - [`CatalogError::NegativePrice`]: a product has a negative price.
    pub fn new(
        currency: &'a Currency,
        products: impl Into<Vec<Product<'a>>>,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch {
                    product: product.id,
                    expected: currency.iso_alpha_code,
                    actual: product_currency.iso_alpha_code,
                });
            }

            if product.price.to_minor_units() < 0 {
                return Err(CatalogError::NegativePrice(product.id));
            }

            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            products,
            index,
            categories: Vec::new(),
            currency,
        })
    }

    /// Attach the category names shown alongside the catalog.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = String>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Products in the order selected by `filter`.
    ///
    /// Each call derives a fresh view; the catalog itself is never reordered.
    /// Products added on the same date keep their catalog order.
    pub fn view(&self, filter: FilterKey) -> Vec<&Product<'a>> {
        let mut products: Vec<&Product<'a>> = self.products.iter().collect();

        match filter {
            FilterKey::All => {}
            FilterKey::Newest => sort_newest_first(&mut products),
            FilterKey::Latest => {
                sort_newest_first(&mut products);
                products.truncate(LATEST_WINDOW);
            }
        }

        products
    }

    /// Get a product by its identifier.
    pub fn product(&self, id: ProductId) -> Option<&Product<'a>> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Category names.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}

fn sort_newest_first(products: &mut [&Product<'_>]) {
    // `sort_by` is stable, so equal dates keep catalog order.
    products.sort_by(|a, b| b.date_added.cmp(&a.date_added));
}

#[cfg(test)]
mod tests {
    use jiff::civil::{Date, date};
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use super::*;

    fn product(id: u32, date_added: Date) -> Product<'static> {
        Product::new(id, format!("Product {id}"), Money::from_minor(100, USD), date_added)
    }

    fn test_catalog() -> Result<ProductCatalog<'static>, CatalogError> {
        ProductCatalog::new(
            USD,
            [
                product(1, date(2024, 3, 15)),
                product(2, date(2024, 3, 20)),
                product(3, date(2024, 3, 18)),
                product(4, date(2024, 3, 22)),
            ],
        )
    }

    fn ids(products: &[&Product<'_>]) -> Vec<u32> {
        products.iter().map(|product| product.id.get()).collect()
    }

    #[test]
    fn filter_key_parses_navigation_params() {
        assert_eq!(FilterKey::from("newest"), FilterKey::Newest);
        assert_eq!(FilterKey::from("latest"), FilterKey::Latest);
        assert_eq!(FilterKey::from("all"), FilterKey::All);
        assert_eq!(FilterKey::from("bogus"), FilterKey::All);
        assert_eq!(FilterKey::from("Newest"), FilterKey::All);
        assert_eq!(FilterKey::from_param(None), FilterKey::All);
        assert_eq!(FilterKey::from_param(Some("latest")), FilterKey::Latest);
    }

    #[test]
    fn filter_key_titles() {
        assert_eq!(FilterKey::All.title(), "All Products");
        assert_eq!(FilterKey::Newest.title(), "Newest Products");
        assert_eq!(FilterKey::Latest.title(), "Latest Arrivals");
    }

    #[test]
    fn view_all_preserves_catalog_order() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(ids(&catalog.view(FilterKey::All)), [1, 2, 3, 4]);

        Ok(())
    }

    #[test]
    fn view_newest_sorts_by_date_descending() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(ids(&catalog.view(FilterKey::Newest)), [4, 2, 3, 1]);

        Ok(())
    }

    #[test]
    fn view_latest_takes_first_two_newest() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(ids(&catalog.view(FilterKey::Latest)), [4, 2]);

        Ok(())
    }

    #[test]
    fn view_unknown_filter_matches_all() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(
            catalog.view(FilterKey::from("bogus")),
            catalog.view(FilterKey::All)
        );

        Ok(())
    }

    #[test]
    fn view_newest_keeps_catalog_order_for_equal_dates() -> TestResult {
        let catalog = ProductCatalog::new(
            USD,
            [
                product(1, date(2024, 3, 15)),
                product(2, date(2024, 3, 22)),
                product(3, date(2024, 3, 15)),
                product(4, date(2024, 3, 22)),
            ],
        )?;

        assert_eq!(ids(&catalog.view(FilterKey::Newest)), [2, 4, 1, 3]);
        assert_eq!(ids(&catalog.view(FilterKey::Latest)), [2, 4]);

        Ok(())
    }

    #[test]
    fn view_does_not_reorder_catalog() -> TestResult {
        let catalog = test_catalog()?;

        _ = catalog.view(FilterKey::Newest);

        let order: Vec<u32> = catalog.iter().map(|product| product.id.get()).collect();
        assert_eq!(order, [1, 2, 3, 4]);

        Ok(())
    }

    #[test]
    fn view_latest_on_small_catalog_returns_everything() -> TestResult {
        let catalog = ProductCatalog::new(USD, [product(9, date(2024, 1, 1))])?;

        assert_eq!(ids(&catalog.view(FilterKey::Latest)), [9]);
        let empty = ProductCatalog::new(USD, Vec::<Product<'static>>::new())?;
        assert!(empty.view(FilterKey::Latest).is_empty());

        Ok(())
    }

    #[test]
    fn product_lookup_by_id() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(
            catalog.product(ProductId::new(3)).map(|p| p.date_added),
            Some(date(2024, 3, 18))
        );
        assert!(catalog.product(ProductId::new(5)).is_none());

        Ok(())
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = ProductCatalog::new(
            USD,
            [product(1, date(2024, 3, 15)), product(1, date(2024, 3, 16))],
        );

        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn new_rejects_currency_mismatch() {
        let result = ProductCatalog::new(GBP, [product(1, date(2024, 3, 15))]);

        assert!(matches!(
            result,
            Err(CatalogError::CurrencyMismatch { expected: "GBP", actual: "USD", .. })
        ));
    }

    #[test]
    fn new_rejects_negative_prices() {
        let mut refund = product(1, date(2024, 3, 15));
        refund.price = Money::from_minor(-100, USD);

        assert!(matches!(
            ProductCatalog::new(USD, [refund]),
            Err(CatalogError::NegativePrice(_))
        ));
    }
}
