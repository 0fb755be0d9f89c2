use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::draft_editor::DraftEditor;
use super::submission_builder::SubmissionBuilder;
use crate::core::{AppError, PricingDefaults, Result};
use crate::modules::gateways::{PersistenceGateway, SignatureApi, VendorApi};
use crate::modules::invoices::models::{
    DraftState, InvoiceId, InvoiceTemplate, LineItemInput, PersistedInvoice,
};
use crate::modules::signatures::SignatureCache;
use crate::modules::vendors::VendorCache;

/// Service for the invoice form: starting a draft, submitting it and
/// previewing the result
pub struct InvoiceService {
    gateway: Arc<dyn PersistenceGateway>,
    vendor_api: Arc<dyn VendorApi>,
    signature_api: Arc<dyn SignatureApi>,
    defaults: PricingDefaults,
    vendors: VendorCache,
    signatures: SignatureCache,
    last_created: Option<InvoiceId>,
}

impl InvoiceService {
    pub fn new(
        gateway: Arc<dyn PersistenceGateway>,
        vendor_api: Arc<dyn VendorApi>,
        signature_api: Arc<dyn SignatureApi>,
        defaults: PricingDefaults,
    ) -> Self {
        Self {
            gateway,
            vendor_api,
            signature_api,
            defaults,
            vendors: VendorCache::new(),
            signatures: SignatureCache::new(),
            last_created: None,
        }
    }

    /// Wire every seam to one backend
    pub fn with_backend<B>(backend: Arc<B>, defaults: PricingDefaults) -> Self
    where
        B: PersistenceGateway + VendorApi + SignatureApi + 'static,
    {
        Self::new(backend.clone(), backend.clone(), backend, defaults)
    }

    /// Open a fresh invoice form.
    ///
    /// The number comes from the backend, the default signature is
    /// preselected and one empty row is added. Backend failures are logged
    /// and leave the affected field empty rather than blocking the form.
    pub async fn start_draft(&mut self, today: NaiveDate) -> DraftEditor {
        let invoice_number = match self.gateway.next_invoice_number().await {
            Ok(number) => number,
            Err(e) => {
                warn!(error = %e, "Could not fetch next invoice number");
                String::new()
            }
        };

        if let Err(e) = self.refresh_directories().await {
            warn!(error = %e, "Starting draft with stale vendor/signature lists");
        }

        let mut draft = DraftState::new(invoice_number, today).with_item(LineItemInput::default());
        draft.tax_rate = self.defaults.tax_rate.to_string();
        draft.signature_id = self.signatures.default_signature().map(|s| s.id);

        info!(
            invoice_number = %draft.invoice_number,
            signature_id = ?draft.signature_id,
            "Draft started"
        );

        DraftEditor::new(draft, self.defaults)
    }

    /// Validate and send the draft. The editor is only borrowed, so it is
    /// untouched whatever happens; on success the new invoice becomes the
    /// one [`preview_url`](Self::preview_url) points at.
    pub async fn submit(&mut self, editor: &DraftEditor) -> Result<PersistedInvoice> {
        let submission_id = Uuid::new_v4();
        let draft = editor.draft();

        let submission = SubmissionBuilder::new(&self.vendors, &self.signatures, self.defaults)
            .build_submission(draft)
            .map_err(|e| {
                warn!(%submission_id, error = %e, "Draft rejected before sending");
                e
            })?;

        info!(
            %submission_id,
            invoice_number = %submission.invoice_number,
            items = submission.items.len(),
            backend = self.gateway.name(),
            "Submitting invoice"
        );

        let persisted = self.gateway.submit(&submission).await.map_err(|e| {
            error!(%submission_id, error = %e, "Invoice submission failed");
            e
        })?;

        info!(
            %submission_id,
            invoice_id = %persisted.invoice_id,
            pdf = %persisted.artifact_file_name(),
            "Invoice created"
        );
        self.last_created = Some(persisted.invoice_id.clone());

        Ok(persisted)
    }

    /// HTML preview of the most recently created invoice
    pub fn preview_url(&self, template: InvoiceTemplate) -> Result<String> {
        let id = self
            .last_created
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("Please create the invoice first"))?;
        Ok(format!("/preview-invoice/{}?template={}", id, template))
    }

    /// Reload both directory caches. Both are attempted; the first failure
    /// is returned.
    pub async fn refresh_directories(&mut self) -> Result<()> {
        let vendors = self.vendors.refresh(self.vendor_api.as_ref()).await;
        let signatures = self.signatures.refresh(self.signature_api.as_ref()).await;
        vendors?;
        signatures?;
        Ok(())
    }

    pub fn last_created(&self) -> Option<&InvoiceId> {
        self.last_created.as_ref()
    }

    pub fn vendors(&self) -> &VendorCache {
        &self.vendors
    }

    /// For vendor management screens, which refresh the cache after edits
    pub fn vendors_mut(&mut self) -> &mut VendorCache {
        &mut self.vendors
    }

    pub fn signatures(&self) -> &SignatureCache {
        &self.signatures
    }

    pub fn signatures_mut(&mut self) -> &mut SignatureCache {
        &mut self.signatures
    }
}
