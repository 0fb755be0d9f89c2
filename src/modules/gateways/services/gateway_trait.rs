use async_trait::async_trait;

use crate::core::{ImageUpload, SubmissionError};
use crate::modules::invoices::models::{InvoiceRecord, InvoiceSubmission, PersistedInvoice};
use crate::modules::settings::models::{CompanySettings, CompanySettingsUpdate};
use crate::modules::signatures::models::{Signature, SignatureDetails};
use crate::modules::taxes::HstGstSettings;
use crate::modules::vendors::models::{Vendor, VendorDetails};

/// Stores invoices and renders their documents.
///
/// One call per operation, no retries. `{"error": msg}` answers come back as
/// [`SubmissionError::ServerRejected`] with `msg` untouched.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Persist an invoice and generate its PDF
    async fn submit(
        &self,
        submission: &InvoiceSubmission,
    ) -> Result<PersistedInvoice, SubmissionError>;

    /// Next free invoice number, as assigned by the backend
    async fn next_invoice_number(&self) -> Result<String, SubmissionError>;

    /// All stored invoices, newest first
    async fn list_invoices(&self) -> Result<Vec<InvoiceRecord>, SubmissionError>;

    /// Get backend name
    fn name(&self) -> &str;
}

/// Vendor directory
#[async_trait]
pub trait VendorApi: Send + Sync {
    async fn list_vendors(&self) -> Result<Vec<Vendor>, SubmissionError>;

    /// Returns the new vendor id
    async fn create_vendor(&self, details: &VendorDetails) -> Result<i64, SubmissionError>;

    async fn update_vendor(&self, id: i64, details: &VendorDetails)
        -> Result<(), SubmissionError>;

    async fn delete_vendor(&self, id: i64) -> Result<(), SubmissionError>;
}

/// Signature images and the default signer
#[async_trait]
pub trait SignatureApi: Send + Sync {
    async fn list_signatures(&self) -> Result<Vec<Signature>, SubmissionError>;

    /// `None` when no signature is flagged as default
    async fn default_signature(&self) -> Result<Option<Signature>, SubmissionError>;

    async fn upload_signature(
        &self,
        upload: ImageUpload,
        details: &SignatureDetails,
    ) -> Result<Signature, SubmissionError>;

    async fn set_default_signature(&self, id: i64) -> Result<(), SubmissionError>;

    async fn edit_signature(
        &self,
        id: i64,
        details: &SignatureDetails,
    ) -> Result<(), SubmissionError>;

    async fn delete_signature(&self, id: i64) -> Result<(), SubmissionError>;
}

/// Company profile, logo and HST/GST number
#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn company_settings(&self) -> Result<CompanySettings, SubmissionError>;

    async fn update_company_settings(
        &self,
        update: &CompanySettingsUpdate,
    ) -> Result<(), SubmissionError>;

    /// Returns the URL the uploaded logo is served from
    async fn upload_logo(&self, upload: ImageUpload) -> Result<String, SubmissionError>;

    async fn hst_gst_settings(&self) -> Result<HstGstSettings, SubmissionError>;

    /// An empty string clears the stored number
    async fn set_hst_gst_number(&self, number: &str) -> Result<(), SubmissionError>;
}
