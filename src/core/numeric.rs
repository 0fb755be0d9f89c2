//! Default-substitution policy for numeric form input.
//!
//! Form fields arrive as raw text. Blank, unparseable, or negative input is
//! never an error: it is replaced by the field's default, and the
//! replacement is reported through [`Coerced::Defaulted`] so callers and
//! tests can tell the two cases apart.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax rate applied when the tax field is blank or invalid (percent)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(13, 0, 0, false, 0);

/// Shipping cost applied when the shipping field is blank or invalid
pub const DEFAULT_SHIPPING_COST: Decimal = Decimal::ZERO;

/// Outcome of coercing one numeric input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced {
    /// Input was a valid non-negative number
    Parsed(Decimal),
    /// Input was blank, unparseable or negative; the default was used
    Defaulted(Decimal),
}

impl Coerced {
    pub fn value(self) -> Decimal {
        match self {
            Coerced::Parsed(v) | Coerced::Defaulted(v) => v,
        }
    }

    pub fn was_defaulted(self) -> bool {
        matches!(self, Coerced::Defaulted(_))
    }
}

/// Parses a non-negative decimal.
///
/// Accepts plain (`12.50`) and scientific (`1.2e3`) notation with
/// surrounding whitespace. Returns `None` for blank, malformed or negative
/// input.
pub fn parse_non_negative(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()?;

    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }

    Some(value)
}

/// Coerces raw text, substituting `default` when it is not a valid
/// non-negative number. Absent input counts as blank.
pub fn coerce(raw: Option<&str>, default: Decimal) -> Coerced {
    match raw.and_then(parse_non_negative) {
        Some(value) => Coerced::Parsed(value),
        None => Coerced::Defaulted(default),
    }
}

/// Applies the same policy to an already-typed value
pub fn coerce_value(value: Option<Decimal>, default: Decimal) -> Coerced {
    match value {
        Some(v) if !v.is_sign_negative() || v.is_zero() => Coerced::Parsed(v),
        _ => Coerced::Defaulted(default),
    }
}

/// Defaults used when pricing inputs are missing or invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingDefaults {
    /// Percentage, e.g. 13 for 13%
    pub tax_rate: Decimal,
    pub shipping_cost: Decimal,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            shipping_cost: DEFAULT_SHIPPING_COST,
        }
    }
}

impl PricingDefaults {
    pub fn tax_rate(&self, raw: Option<&str>) -> Coerced {
        coerce(raw, self.tax_rate)
    }

    pub fn shipping_cost(&self, raw: Option<&str>) -> Coerced {
        coerce(raw, self.shipping_cost)
    }
}
