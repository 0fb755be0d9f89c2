// Invoices module

pub mod models;
pub mod services;

pub use models::{
    DraftState, InvoiceId, InvoiceRecord, InvoiceSubmission, InvoiceTemplate, InvoiceTotals,
    LineItem, LineItemInput, PersistedInvoice, Unit,
};
pub use services::{
    DashboardService, DraftAction, DraftEditor, InvoiceAggregator, InvoiceService,
    SubmissionBuilder,
};
