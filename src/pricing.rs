//! Pricing
//!
//! Money arithmetic is done on integer minor units (pence/cents) so totals
//! never drift the way binary floating point does.

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::CartLineItem;

/// Errors that can occur while calculating a total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// The total does not fit in the minor unit range.
    #[error("total price overflowed")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `price * quantity` for a single line.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the result does not fit in minor units.
pub fn line_total<'a>(
    price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Calculates the total price of a list of cart line items.
///
/// An empty list totals zero in the given currency.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the total does not fit in minor units.
/// - [`TotalPriceError::Money`]: a line item is priced in another currency.
pub fn total_price<'a>(
    items: &[CartLineItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor = items.iter().try_fold(0i64, |acc, item| {
        let item_currency = item.price().currency();

        if item_currency != currency {
            return Err(MoneyError::CurrencyMismatch {
                expected: currency.iso_alpha_code,
                actual: item_currency.iso_alpha_code,
            }
            .into());
        }

        let line = line_total(item.price(), item.quantity())?;

        acc.checked_add(line.to_minor_units())
            .ok_or(TotalPriceError::Overflow)
    })?;

    Ok(Money::from_minor(minor, currency))
}
