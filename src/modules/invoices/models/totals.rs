use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money;

/// Derived pricing figures for an invoice.
///
/// Amounts are kept at full precision; the `display_*` helpers round to two
/// places. `tax_rate_defaulted` / `shipping_defaulted` record whether the
/// policy default replaced the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub shipping_cost: Decimal,
    pub grand_total: Decimal,
    pub tax_rate_defaulted: bool,
    pub shipping_defaulted: bool,
}

impl InvoiceTotals {
    pub fn display_subtotal(&self) -> String {
        money::format_amount(self.subtotal)
    }

    pub fn display_tax(&self) -> String {
        money::format_amount(self.tax)
    }

    pub fn display_shipping(&self) -> String {
        money::format_amount(self.shipping_cost)
    }

    pub fn display_grand_total(&self) -> String {
        money::format_amount(self.grand_total)
    }

    pub fn display_tax_rate(&self) -> String {
        money::format_rate(self.tax_rate)
    }
}
