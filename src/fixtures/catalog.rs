//! Catalog Fixtures

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    catalog::ProductCatalog,
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for a catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Catalog currency code (e.g., "USD")
    pub currency: String,

    /// Category names
    #[serde(default)]
    pub categories: Vec<String>,

    /// Products, in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price (e.g., "1299.99 USD")
    pub price: String,

    /// Product description
    #[serde(default)]
    pub description: String,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Date added (e.g., "2024-03-15")
    pub date_added: Date,
}

impl TryFrom<ProductFixture> for Product<'static> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
            description: fixture.description,
            date_added: fixture.date_added,
            image: fixture.image,
        })
    }
}

impl TryFrom<CatalogFixture> for ProductCatalog<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProductCatalog::new(currency, products)?.with_categories(fixture.categories))
    }
}

/// Parse a currency code into one of the supported currencies.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] if the code is not recognised.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// The amount must not have more decimal places than the currency's minor
/// unit; "2.999 GBP" is rejected rather than rounded.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not an exact decimal in the currency's minor units, or
/// if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = parse_currency(
        parts
            .get(1)
            .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?,
    )?;

    let scaled = 10i64
        .checked_pow(currency.exponent)
        .and_then(|scale| amount.checked_mul(Decimal::from(scale)))
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    if !scaled.fract().is_zero() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = scaled
        .to_i64()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_reads_exact_minor_units() -> TestResult {
        assert_eq!(parse_price("1299.99 USD")?, (129_999, USD));
        assert_eq!(parse_price("5.5 GBP")?, (550, GBP));
        assert_eq!(parse_price("10 EUR")?, (1000, EUR));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_sub_minor_precision() {
        assert!(matches!(
            parse_price("2.999 GBP"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_bad_format() {
        assert!(matches!(
            parse_price("1299.99"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("abc USD"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        assert!(matches!(
            parse_price("1.00 JPY"),
            Err(FixtureError::UnknownCurrency(code)) if code == "JPY"
        ));
    }

    #[test]
    fn product_fixture_converts_to_product() -> TestResult {
        let fixture = ProductFixture {
            id: ProductId::new(2),
            name: "4K Smart TV".to_string(),
            price: "799.99 USD".to_string(),
            description: "Crystal clear display".to_string(),
            image: String::new(),
            date_added: "2024-03-20".parse()?,
        };

        let product = Product::try_from(fixture)?;

        assert_eq!(product.price, Money::from_minor(79_999, USD));
        assert_eq!(product.date_added.to_string(), "2024-03-20");

        Ok(())
    }
}
