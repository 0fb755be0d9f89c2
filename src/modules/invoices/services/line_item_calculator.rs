use rust_decimal::Decimal;

use crate::core::numeric::{self, parse_non_negative};

/// Line total for one item.
///
/// Formula: line_total = quantity × unit_price
/// Rounding: none. Display code rounds to two places, aggregation uses the
/// full-precision value.
///
/// A negative quantity or price counts as 0.
pub fn compute_line_total(quantity: Decimal, unit_price: Decimal) -> Decimal {
    let quantity = numeric::coerce_value(Some(quantity), Decimal::ZERO).value();
    let unit_price = numeric::coerce_value(Some(unit_price), Decimal::ZERO).value();

    quantity.saturating_mul(unit_price)
}

/// Line total from raw form text; blank or malformed input counts as 0
pub fn compute_line_total_raw(quantity: &str, unit_price: &str) -> Decimal {
    compute_line_total(
        parse_non_negative(quantity).unwrap_or(Decimal::ZERO),
        parse_non_negative(unit_price).unwrap_or(Decimal::ZERO),
    )
}
