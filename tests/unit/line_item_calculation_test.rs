// Property-based tests for line item totals
//
// Properties tested:
// 1. line_total = quantity * unit_price for non-negative inputs
// 2. line_total is never negative
// 3. no rounding happens before display
// 4. malformed or negative raw input prices as 0

use invoice_desk::core::money;
use invoice_desk::invoices::services::line_item_calculator::{
    compute_line_total, compute_line_total_raw,
};
use invoice_desk::invoices::{LineItemInput, Unit};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    /// Property: line total is the exact product
    #[test]
    fn test_line_total_is_product(
        quantity_milli in 0i64..=10_000_000,
        price_cents in 0i64..=100_000_000,
    ) {
        let quantity = Decimal::new(quantity_milli, 3);
        let unit_price = Decimal::new(price_cents, 2);

        prop_assert_eq!(compute_line_total(quantity, unit_price), quantity * unit_price);
    }

    /// Property: negative inputs count as zero
    #[test]
    fn test_negative_inputs_price_as_zero(
        quantity_milli in -10_000_000i64..0,
        price_cents in 0i64..=100_000_000,
    ) {
        let quantity = Decimal::new(quantity_milli, 3);
        let unit_price = Decimal::new(price_cents, 2);

        prop_assert_eq!(compute_line_total(quantity, unit_price), Decimal::ZERO);
        prop_assert_eq!(compute_line_total(unit_price, quantity), Decimal::ZERO);
    }

    /// Property: raw text totals agree with typed totals
    #[test]
    fn test_raw_text_matches_typed(
        quantity_milli in 0i64..=10_000_000,
        price_cents in 0i64..=100_000_000,
    ) {
        let quantity = Decimal::new(quantity_milli, 3);
        let unit_price = Decimal::new(price_cents, 2);

        prop_assert_eq!(
            compute_line_total_raw(&quantity.to_string(), &unit_price.to_string()),
            compute_line_total(quantity, unit_price)
        );
    }

    /// Property: garbage text never panics and prices as zero
    #[test]
    fn test_garbage_text_prices_as_zero(text in "[a-zA-Z ]{0,12}") {
        prop_assert_eq!(compute_line_total_raw(&text, "10"), Decimal::ZERO);
        prop_assert_eq!(compute_line_total_raw("10", &text), Decimal::ZERO);
    }
}

#[test]
fn test_full_precision_until_display() {
    let total = compute_line_total(dec!(0.333), dec!(3));
    assert_eq!(total, dec!(0.999));
    assert_eq!(money::format_amount(total), "$1.00");
}

#[test]
fn test_form_row_totals() {
    let row = LineItemInput::new("Garlic", "2", Unit::Kilogram, "10");
    assert_eq!(row.to_line_item().line_total(), dec!(20));

    let blank = LineItemInput::new("", "", Unit::Gram, "");
    assert_eq!(blank.to_line_item().line_total(), Decimal::ZERO);

    let negative = LineItemInput::new("Oats", "-3", Unit::Gram, "4");
    assert_eq!(negative.to_line_item().line_total(), Decimal::ZERO);
}
