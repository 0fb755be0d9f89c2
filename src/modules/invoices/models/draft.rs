use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::line_item::{LineItem, LineItemInput};
use crate::core::wire::raw_text;

/// Default category for a new invoice
pub const DEFAULT_INVOICE_TYPE: &str = "Sale";

/// HTML template used by the backend's invoice preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceTemplate {
    #[default]
    Standard,
    Visual,
}

impl std::fmt::Display for InvoiceTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceTemplate::Standard => write!(f, "standard"),
            InvoiceTemplate::Visual => write!(f, "visual"),
        }
    }
}

impl std::str::FromStr for InvoiceTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(InvoiceTemplate::Standard),
            "visual" => Ok(InvoiceTemplate::Visual),
            _ => Err(format!("Invalid template: {}", s)),
        }
    }
}

/// Snapshot of the invoice form.
///
/// Numeric pricing fields stay as raw text so the coercion policy is applied
/// in exactly one place. Vendor and signature are selections by id; they are
/// resolved against the directory caches when a submission is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    #[serde(default)]
    pub invoice_number: String,

    pub date: NaiveDate,

    #[serde(rename = "type", default)]
    pub invoice_type: String,

    #[serde(default)]
    pub vendor_id: Option<i64>,

    /// Percentage, raw text
    #[serde(default, deserialize_with = "raw_text")]
    pub tax_rate: String,

    /// Raw text
    #[serde(default, deserialize_with = "raw_text")]
    pub shipping_cost: String,

    #[serde(default)]
    pub items: Vec<LineItemInput>,

    #[serde(default)]
    pub signature_id: Option<i64>,

    #[serde(default)]
    pub hst_gst_number: Option<String>,

    #[serde(default)]
    pub comments: Option<String>,

    #[serde(default)]
    pub terms_conditions: Option<String>,

    #[serde(default)]
    pub shipping_method: Option<String>,

    #[serde(default)]
    pub shipping_terms: Option<String>,

    #[serde(default)]
    pub delivery_date: Option<String>,

    #[serde(default)]
    pub template: InvoiceTemplate,
}

impl DraftState {
    pub fn new(invoice_number: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            date,
            invoice_type: DEFAULT_INVOICE_TYPE.to_string(),
            vendor_id: None,
            tax_rate: String::new(),
            shipping_cost: String::new(),
            items: Vec::new(),
            signature_id: None,
            hst_gst_number: None,
            comments: None,
            terms_conditions: None,
            shipping_method: None,
            shipping_terms: None,
            delivery_date: None,
            template: InvoiceTemplate::Standard,
        }
    }

    pub fn with_item(mut self, item: LineItemInput) -> Self {
        self.items.push(item);
        self
    }

    /// Every row, blank or not, as priced line items. Totals shown while
    /// editing include rows that have no description yet.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.items.iter().map(LineItemInput::to_line_item).collect()
    }

    /// Rows that will be submitted, in entry order
    pub fn submittable_items(&self) -> impl Iterator<Item = &LineItemInput> {
        self.items.iter().filter(|item| item.has_description())
    }
}
