use rust_decimal::Decimal;

use crate::core::numeric::{self, Coerced, PricingDefaults};
use crate::modules::invoices::models::{DraftState, InvoiceTotals, LineItem};
use crate::modules::taxes::TaxCalculator;

/// Sums line items and applies tax and shipping.
///
/// Pure: the same items, rate and shipping always give the same totals.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceAggregator {
    tax: TaxCalculator,
    default_shipping: Decimal,
}

impl InvoiceAggregator {
    pub fn new(defaults: PricingDefaults) -> Self {
        Self {
            tax: TaxCalculator::new(defaults.tax_rate),
            default_shipping: defaults.shipping_cost,
        }
    }

    /// Compute invoice totals.
    ///
    /// Formula:
    /// * subtotal = Σ line_total, in item order
    /// * tax = subtotal × (tax_rate / 100)
    /// * grand_total = subtotal + tax + shipping_cost
    ///
    /// A missing or negative tax rate uses the default rate (13 unless
    /// configured); a missing or negative shipping cost uses the default
    /// shipping (0 unless configured).
    pub fn compute_totals(
        &self,
        items: &[LineItem],
        tax_rate: Option<Decimal>,
        shipping_cost: Option<Decimal>,
    ) -> InvoiceTotals {
        let rate = self.tax.resolve_rate(tax_rate);
        let shipping = numeric::coerce_value(shipping_cost, self.default_shipping);
        self.totals_for(items, rate, shipping)
    }

    /// Same as [`compute_totals`](Self::compute_totals) with raw form text
    /// for the rate and shipping fields
    pub fn compute_totals_raw(
        &self,
        items: &[LineItem],
        tax_rate: &str,
        shipping_cost: &str,
    ) -> InvoiceTotals {
        let rate = numeric::coerce(Some(tax_rate), self.tax.default_rate());
        let shipping = numeric::coerce(Some(shipping_cost), self.default_shipping);
        self.totals_for(items, rate, shipping)
    }

    /// Totals for everything currently in the draft, including rows that
    /// have no description yet
    pub fn compute_draft_totals(&self, draft: &DraftState) -> InvoiceTotals {
        self.compute_totals_raw(&draft.line_items(), &draft.tax_rate, &draft.shipping_cost)
    }

    fn totals_for(&self, items: &[LineItem], rate: Coerced, shipping: Coerced) -> InvoiceTotals {
        let subtotal = items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        let tax = self.tax.calculate_tax(subtotal, rate.value());
        let grand_total = subtotal.saturating_add(tax).saturating_add(shipping.value());

        InvoiceTotals {
            subtotal,
            tax_rate: rate.value(),
            tax,
            shipping_cost: shipping.value(),
            grand_total,
            tax_rate_defaulted: rate.was_defaulted(),
            shipping_defaulted: shipping.was_defaulted(),
        }
    }
}

impl Default for InvoiceAggregator {
    fn default() -> Self {
        Self::new(PricingDefaults::default())
    }
}
