//! Receipt
//!
//! Checkout summary for a cart. No payment is taken; the receipt is what the
//! cart panel shows when the user checks out.

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{CartObserver, CartStore},
    pricing::TotalPriceError,
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating a line or cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product name
    pub name: String,

    /// Unit price
    pub unit_price: Money<'a, Currency>,

    /// Quantity purchased
    pub quantity: u32,

    /// `unit_price * quantity`
    pub line_total: Money<'a, Currency>,
}

/// Checkout summary for a cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    lines: SmallVec<[ReceiptLine<'a>; 8]>,
    total: Money<'a, Currency>,
    currency: &'a Currency,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the current state of a cart.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::TotalPrice`] if a total does not fit in minor units.
    pub fn from_cart<O: CartObserver>(cart: &CartStore<'a, O>) -> Result<Self, ReceiptError> {
        let lines = cart
            .items()
            .iter()
            .map(|item| {
                Ok(ReceiptLine {
                    name: item.name().to_string(),
                    unit_price: *item.price(),
                    quantity: item.quantity(),
                    line_total: item.line_total()?,
                })
            })
            .collect::<Result<SmallVec<_>, TotalPriceError>>()?;

        Ok(Self {
            lines,
            total: cart.total()?,
            currency: cart.currency(),
        })
    }

    /// Receipt lines, in cart order.
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Total amount due.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Check if the receipt has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the receipt.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Writes the receipt as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.is_empty() {
            return writeln!(out, "Your cart is empty").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["Item", "Price", "Qty", "Total"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.unit_price.to_string(),
                line.quantity.to_string(),
                line.line_total.to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Total: {}", self.total).map_err(|_err| ReceiptError::IO)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    #[test]
    fn from_cart_builds_lines_and_total() -> TestResult {
        let mut cart = CartStore::new(USD);
        let added = date(2024, 3, 15);
        let ten = Product::new(1, "Ten", Money::from_minor(1000, USD), added);
        let five_fifty = Product::new(2, "Five fifty", Money::from_minor(550, USD), added);

        cart.add(&ten)?;
        cart.add(&ten)?;
        cart.add(&five_fifty)?;

        let receipt = Receipt::from_cart(&cart)?;

        assert_eq!(receipt.lines().len(), 2);
        assert_eq!(
            receipt.lines().first().map(|line| line.line_total),
            Some(Money::from_minor(2000, USD))
        );
        assert_eq!(receipt.total(), Money::from_minor(2550, USD));
        assert_eq!(receipt.currency(), USD);

        Ok(())
    }

    #[test]
    fn write_to_renders_items_and_total() -> TestResult {
        let mut cart = CartStore::new(USD);
        let price = Money::from_minor(19_999, USD);
        let headphones = Product::new(3, "Wireless Headphones", price, date(2024, 3, 18));

        cart.add(&headphones)?;
        cart.update_quantity(headphones.id, 2)?;

        let mut out = Vec::new();
        Receipt::from_cart(&cart)?.write_to(&mut out)?;

        let output = String::from_utf8(out)?;
        assert!(output.contains("Wireless Headphones"));
        assert!(output.contains("199.99"));
        assert!(output.contains("399.98"));
        assert!(output.contains("Total:"));

        Ok(())
    }

    #[test]
    fn write_to_empty_cart() -> TestResult {
        let cart = CartStore::new(USD);

        let mut out = Vec::new();
        Receipt::from_cart(&cart)?.write_to(&mut out)?;

        assert_eq!(String::from_utf8(out)?, "Your cart is empty\n");

        Ok(())
    }
}
