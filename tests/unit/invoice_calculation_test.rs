// Property-based tests for invoice totals
//
// Properties tested:
// 1. subtotal = Σ line_total
// 2. grand_total = subtotal + tax + shipping
// 3. compute_totals is idempotent
// 4. missing tax rate uses 13, missing shipping uses 0

use invoice_desk::core::PricingDefaults;
use invoice_desk::invoices::{InvoiceAggregator, LineItem, LineItemInput, Unit};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn item_strategy() -> impl Strategy<Value = LineItem> {
    (0i64..=1_000_000, 0i64..=10_000_000).prop_map(|(quantity_milli, price_cents)| {
        LineItem::new(
            "Item",
            Decimal::new(quantity_milli, 3),
            Unit::Gram,
            Decimal::new(price_cents, 2),
        )
    })
}

proptest! {
    /// Property: subtotal is the sum of line totals in order
    #[test]
    fn test_subtotal_is_sum_of_lines(items in prop::collection::vec(item_strategy(), 0..20)) {
        let aggregator = InvoiceAggregator::default();
        let totals = aggregator.compute_totals(&items, None, None);

        let expected: Decimal = items.iter().map(|i| i.quantity * i.unit_price).sum();
        prop_assert_eq!(totals.subtotal, expected);
    }

    /// Property: grand total = subtotal + subtotal × rate/100 + shipping
    #[test]
    fn test_grand_total_formula(
        items in prop::collection::vec(item_strategy(), 1..10),
        rate_bp in 0i64..=5_000,
        shipping_cents in 0i64..=1_000_000,
    ) {
        let aggregator = InvoiceAggregator::default();
        let rate = Decimal::new(rate_bp, 2);
        let shipping = Decimal::new(shipping_cents, 2);

        let totals = aggregator.compute_totals(&items, Some(rate), Some(shipping));
        let expected_tax = totals.subtotal * (rate / dec!(100));

        prop_assert_eq!(totals.tax, expected_tax);
        prop_assert_eq!(totals.grand_total, totals.subtotal + expected_tax + shipping);
        prop_assert!(!totals.tax_rate_defaulted);
        prop_assert!(!totals.shipping_defaulted);
    }

    /// Property: identical inputs give identical totals
    #[test]
    fn test_totals_idempotent(
        items in prop::collection::vec(item_strategy(), 0..10),
        rate_text in "[0-9]{0,2}(\\.[0-9])?",
        shipping_text in "[0-9]{0,3}",
    ) {
        let aggregator = InvoiceAggregator::default();
        let first = aggregator.compute_totals_raw(&items, &rate_text, &shipping_text);
        let second = aggregator.compute_totals_raw(&items, &rate_text, &shipping_text);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_reference_invoice() {
    let items = vec![
        LineItem::new("Garlic", dec!(2), Unit::Kilogram, dec!(10)),
        LineItem::new("Shallots", dec!(1), Unit::Kilogram, dec!(5)),
    ];
    let totals = InvoiceAggregator::default().compute_totals(&items, Some(dec!(13)), Some(dec!(0)));

    assert_eq!(totals.subtotal, dec!(25));
    assert_eq!(totals.tax, dec!(3.25));
    assert_eq!(totals.grand_total, dec!(28.25));
    assert_eq!(totals.display_grand_total(), "$28.25");
}

#[test]
fn test_omitted_rate_and_shipping() {
    let items = vec![LineItem::new("Oats", dec!(1), Unit::Gram, dec!(100))];
    let totals = InvoiceAggregator::default().compute_totals(&items, None, None);

    assert_eq!(totals.tax_rate, dec!(13));
    assert_eq!(totals.shipping_cost, Decimal::ZERO);
    assert_eq!(totals.grand_total, dec!(113));
    assert!(totals.tax_rate_defaulted);
    assert!(totals.shipping_defaulted);
}

#[test]
fn test_explicit_zero_rate_is_kept() {
    let items = vec![LineItem::new("Oats", dec!(1), Unit::Gram, dec!(100))];
    let totals = InvoiceAggregator::default().compute_totals_raw(&items, "0", "");

    assert_eq!(totals.tax, Decimal::ZERO);
    assert_eq!(totals.grand_total, dec!(100));
    assert!(!totals.tax_rate_defaulted);
}

#[test]
fn test_configured_defaults() {
    let defaults = PricingDefaults {
        tax_rate: dec!(5),
        shipping_cost: dec!(12.50),
    };
    let items = vec![LineItem::new("Oats", dec!(1), Unit::Gram, dec!(100))];
    let totals = InvoiceAggregator::new(defaults).compute_totals_raw(&items, "abc", "-4");

    assert_eq!(totals.tax, dec!(5));
    assert_eq!(totals.grand_total, dec!(117.50));
}

#[test]
fn test_blank_rows_count_while_editing() {
    let rows = [
        LineItemInput::new("Garlic", "2", Unit::Kilogram, "10"),
        LineItemInput::new("", "1", Unit::Gram, "5"),
    ];
    let items: Vec<LineItem> = rows.iter().map(LineItemInput::to_line_item).collect();
    let totals = InvoiceAggregator::default().compute_totals(&items, None, None);
    assert_eq!(totals.subtotal, dec!(25));
}
