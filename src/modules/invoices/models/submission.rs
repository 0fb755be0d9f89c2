// Wire payload for POST /api/invoices.
//
// Only raw items, rates and metadata travel; the backend recomputes totals
// itself, so subtotal/tax/grand total are deliberately absent. Numbers are
// sent as JSON numbers because the backend stores them in REAL columns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::draft::InvoiceTemplate;
use super::line_item::{LineItem, LineItemInput, Unit};

/// One item as the backend expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionItem {
    pub lot_number: String,

    /// Item description
    pub item: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,

    pub units: Unit,

    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl From<&LineItemInput> for SubmissionItem {
    fn from(input: &LineItemInput) -> Self {
        let LineItem {
            lot_number,
            description,
            quantity,
            unit,
            unit_price,
        } = input.to_line_item();

        Self {
            lot_number: lot_number.unwrap_or_default(),
            item: description,
            quantity,
            units: unit,
            unit_price,
        }
    }
}

/// Resolved signature reference carried on the invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRef {
    pub id: i64,
    pub name: String,
    pub position: String,
    /// Image file name
    pub image: String,
}

/// A fully-formed invoice submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSubmission {
    pub invoice_number: String,
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub invoice_type: String,

    /// `None` when no vendor is selected or the selection no longer exists
    pub vendor_id: Option<i64>,
    pub vendor_name: String,
    pub vendor_address: String,
    pub vendor_contact: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hst_gst_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_terms: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_conditions: Option<String>,

    pub signature: Option<SignatureRef>,

    /// Percentage, always resolved
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate: Decimal,

    /// Always resolved
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_cost: Decimal,

    pub notes: String,

    pub items: Vec<SubmissionItem>,

    pub template: InvoiceTemplate,
}
