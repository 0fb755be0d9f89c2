use rust_decimal::Decimal;

use crate::core::numeric::{self, Coerced};

/// TaxCalculator applies a percentage sales tax (HST/GST) to a subtotal
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator {
    default_rate: Decimal,
}

impl TaxCalculator {
    pub fn new(default_rate: Decimal) -> Self {
        Self { default_rate }
    }

    /// Rate used when the tax field is unset or invalid
    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    /// Resolve the effective rate.
    /// Missing or negative rates fall back to the default; zero is a valid
    /// rate for tax-exempt invoices.
    pub fn resolve_rate(&self, tax_rate: Option<Decimal>) -> Coerced {
        numeric::coerce_value(tax_rate, self.default_rate)
    }

    /// tax = subtotal × (rate / 100)
    pub fn calculate_tax(&self, subtotal: Decimal, rate_percent: Decimal) -> Decimal {
        subtotal.saturating_mul(rate_percent / Decimal::ONE_HUNDRED)
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new(numeric::DEFAULT_TAX_RATE)
    }
}
