mod draft;
mod invoice;
mod line_item;
mod submission;
mod totals;

pub use draft::{DraftState, InvoiceTemplate, DEFAULT_INVOICE_TYPE};
pub use invoice::{InvoiceId, InvoiceRecord, PersistedInvoice};
pub use line_item::{LineItem, LineItemInput, Unit};
pub use submission::{InvoiceSubmission, SignatureRef, SubmissionItem};
pub use totals::InvoiceTotals;
