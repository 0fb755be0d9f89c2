pub mod dashboard;
pub mod draft_editor;
pub mod invoice_aggregator;
pub mod invoice_service;
pub mod line_item_calculator;
pub mod submission_builder;

pub use dashboard::{DashboardService, DashboardSummary, InvoiceRow, EXPORT_LINK};
pub use draft_editor::{DraftAction, DraftEditor, ItemField, MetaField};
pub use invoice_aggregator::InvoiceAggregator;
pub use invoice_service::InvoiceService;
pub use line_item_calculator::compute_line_total;
pub use submission_builder::SubmissionBuilder;
