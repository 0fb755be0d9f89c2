use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{debug, error};

use crate::core::{paths, Result};
use crate::modules::gateways::PersistenceGateway;
use crate::modules::invoices::models::InvoiceRecord;

/// Download link for the spreadsheet export of all invoices
pub const EXPORT_LINK: &str = "/api/export-excel";

const NO_VENDOR: &str = "N/A";

/// Counters shown above the invoice table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_count: usize,
    /// Invoices dated in the same year and month as today
    pub month_count: usize,
}

/// One line of the invoice table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRow {
    pub invoice_number: String,
    pub date: String,
    pub invoice_type: String,
    pub vendor: String,
    pub status: String,
    pub pdf_link: Option<String>,
}

impl InvoiceRow {
    /// CSS badge class for the status
    pub fn status_badge(&self) -> String {
        format!("badge-{}", self.status.to_lowercase())
    }

    /// Whether `query` appears in the row's visible text, ignoring case
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [
            &self.invoice_number,
            &self.date,
            &self.invoice_type,
            &self.vendor,
            &self.status,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

impl From<&InvoiceRecord> for InvoiceRow {
    fn from(record: &InvoiceRecord) -> Self {
        let vendor = record
            .vendor_name
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(NO_VENDOR)
            .to_string();

        Self {
            invoice_number: record.invoice_number.clone(),
            date: record.date.clone(),
            invoice_type: record.invoice_type.clone(),
            vendor,
            status: record.status.clone(),
            pdf_link: record.pdf_file_name().map(|name| paths::artifact_link(&name)),
        }
    }
}

pub fn summarize(records: &[InvoiceRecord], today: NaiveDate) -> DashboardSummary {
    let month_count = records
        .iter()
        .filter_map(|r| NaiveDate::parse_from_str(r.date.trim(), "%Y-%m-%d").ok())
        .filter(|d| d.year() == today.year() && d.month() == today.month())
        .count();

    DashboardSummary {
        total_count: records.len(),
        month_count,
    }
}

/// Rows matching `query`; an empty query keeps everything
pub fn filter_rows<'a>(rows: &'a [InvoiceRow], query: &str) -> Vec<&'a InvoiceRow> {
    let query = query.trim();
    rows.iter()
        .filter(|row| query.is_empty() || row.matches(query))
        .collect()
}

/// Invoice registry view
pub struct DashboardService {
    gateway: Arc<dyn PersistenceGateway>,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    /// Load the invoice list and derive the counters and rows from it
    pub async fn load(&self, today: NaiveDate) -> Result<(DashboardSummary, Vec<InvoiceRow>)> {
        let records = self.gateway.list_invoices().await.map_err(|e| {
            error!(error = %e, "Failed to load invoices");
            e
        })?;

        let summary = summarize(&records, today);
        debug!(
            total = summary.total_count,
            this_month = summary.month_count,
            "Invoices loaded"
        );

        let rows = records.iter().map(InvoiceRow::from).collect();
        Ok((summary, rows))
    }
}
