// A line item is one row of goods on an invoice: an optional lot number, a
// description, a quantity measured in grams or kilograms, and a unit price.
//
// `LineItemInput` is the row exactly as typed into the form. `LineItem` is
// the same row after numeric coercion and is what pricing works on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::numeric;
use crate::core::wire::raw_text;
use crate::modules::invoices::services::line_item_calculator::compute_line_total;

/// Unit of measure for a line item quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Gram,
    Kilogram,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Gram => write!(f, "Gram"),
            Unit::Kilogram => write!(f, "Kilogram"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gram" | "g" => Ok(Unit::Gram),
            "kilogram" | "kg" => Ok(Unit::Kilogram),
            _ => Err(format!("Invalid unit: {}", s)),
        }
    }
}

/// One item row as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    #[serde(default)]
    pub lot_number: String,

    #[serde(default)]
    pub description: String,

    /// Raw quantity text
    #[serde(default, deserialize_with = "raw_text")]
    pub quantity: String,

    #[serde(default)]
    pub unit: Unit,

    /// Raw unit price text
    #[serde(default, deserialize_with = "raw_text")]
    pub unit_price: String,
}

impl LineItemInput {
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<String>,
        unit: Unit,
        unit_price: impl Into<String>,
    ) -> Self {
        Self {
            lot_number: String::new(),
            description: description.into(),
            quantity: quantity.into(),
            unit,
            unit_price: unit_price.into(),
        }
    }

    pub fn with_lot_number(mut self, lot_number: impl Into<String>) -> Self {
        self.lot_number = lot_number.into();
        self
    }

    /// Rows without a description are dropped from submissions
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Apply the numeric policy: blank, malformed or negative quantity and
    /// price become 0
    pub fn to_line_item(&self) -> LineItem {
        LineItem {
            lot_number: (!self.lot_number.trim().is_empty()).then(|| self.lot_number.clone()),
            description: self.description.clone(),
            quantity: numeric::coerce(Some(self.quantity.as_str()), Decimal::ZERO).value(),
            unit: self.unit,
            unit_price: numeric::coerce(Some(self.unit_price.as_str()), Decimal::ZERO).value(),
        }
    }
}

/// A line item with numeric fields resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub lot_number: Option<String>,
    pub description: String,
    pub quantity: Decimal,
    pub unit: Unit,
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit: Unit,
        unit_price: Decimal,
    ) -> Self {
        Self {
            lot_number: None,
            description: description.into(),
            quantity,
            unit,
            unit_price,
        }
    }

    /// quantity × unit_price, full precision
    pub fn line_total(&self) -> Decimal {
        compute_line_total(self.quantity, self.unit_price)
    }
}
