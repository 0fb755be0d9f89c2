// Invoices as the backend reports them: the listing rows from
// GET /api/invoices and the acknowledgement returned after a submission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::paths;
use crate::core::wire::null_as_default;

/// Backend-assigned invoice id. The backend sends an integer today but the
/// client treats it as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawInvoiceId", into = "String")]
pub struct InvoiceId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInvoiceId {
    Number(i64),
    Text(String),
}

impl From<RawInvoiceId> for InvoiceId {
    fn from(raw: RawInvoiceId) -> Self {
        match raw {
            RawInvoiceId::Number(n) => InvoiceId(n.to_string()),
            RawInvoiceId::Text(s) => InvoiceId(s),
        }
    }
}

impl From<InvoiceId> for String {
    fn from(id: InvoiceId) -> Self {
        id.0
    }
}

impl InvoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        InvoiceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The record the backend returns for an accepted submission.
///
/// Distinct from the draft: the draft is never updated with these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedInvoice {
    pub invoice_id: InvoiceId,

    /// Opaque location of the generated PDF, in the server's path syntax
    pub artifact_path: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl PersistedInvoice {
    /// File name of the generated document, separator-agnostic
    pub fn artifact_file_name(&self) -> String {
        paths::display_file_name(&self.artifact_path)
    }

    pub fn artifact_link(&self) -> String {
        paths::artifact_link(&self.artifact_path)
    }
}

fn default_status() -> String {
    "Draft".to_string()
}

/// One row of the invoice registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: InvoiceId,

    pub invoice_number: String,

    /// `YYYY-MM-DD` as stored by the backend
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub invoice_type: String,

    #[serde(default)]
    pub vendor_name: Option<String>,

    #[serde(default)]
    pub vendor_address: Option<String>,

    #[serde(default = "default_status")]
    pub status: String,

    #[serde(default)]
    pub pdf_path: Option<String>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub shipping_cost: Option<Decimal>,

    #[serde(default)]
    pub signature_name: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,
}

impl InvoiceRecord {
    /// PDF file name, when a document was generated
    pub fn pdf_file_name(&self) -> Option<String> {
        self.pdf_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(paths::display_file_name)
    }
}
