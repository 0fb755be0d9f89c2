use tracing::debug;

use crate::core::{PricingDefaults, ValidationError};
use crate::modules::invoices::models::{DraftState, InvoiceSubmission, SubmissionItem};
use crate::modules::signatures::SignatureCache;
use crate::modules::vendors::VendorCache;

/// Turns a draft into the payload the backend stores.
///
/// Pure assembly: vendor and signature selections are resolved against the
/// caches it was given, nothing is sent anywhere.
pub struct SubmissionBuilder<'a> {
    vendors: &'a VendorCache,
    signatures: &'a SignatureCache,
    defaults: PricingDefaults,
}

impl<'a> SubmissionBuilder<'a> {
    pub fn new(
        vendors: &'a VendorCache,
        signatures: &'a SignatureCache,
        defaults: PricingDefaults,
    ) -> Self {
        Self {
            vendors,
            signatures,
            defaults,
        }
    }

    /// Build the submission for `draft`.
    ///
    /// Rows with a blank description are dropped; if none remain the draft
    /// is rejected with [`ValidationError::NoItems`]. A blank invoice number
    /// or type is rejected next. A vendor or signature selection that is no
    /// longer in the cache is sent as empty.
    pub fn build_submission(
        &self,
        draft: &DraftState,
    ) -> Result<InvoiceSubmission, ValidationError> {
        let items: Vec<SubmissionItem> =
            draft.submittable_items().map(SubmissionItem::from).collect();

        if items.is_empty() {
            return Err(ValidationError::NoItems);
        }
        if draft.invoice_number.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField {
                field: "invoice_number",
            });
        }
        if draft.invoice_type.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "type" });
        }

        let vendor = draft.vendor_id.and_then(|id| self.vendors.find(id));
        if draft.vendor_id.is_some() && vendor.is_none() {
            debug!(vendor_id = ?draft.vendor_id, "Selected vendor no longer exists");
        }

        let signature = draft
            .signature_id
            .and_then(|id| self.signatures.find(id))
            .map(|s| s.to_ref());

        let tax_rate = self.defaults.tax_rate(Some(draft.tax_rate.as_str())).value();
        let shipping_cost = self.defaults.shipping_cost(Some(draft.shipping_cost.as_str())).value();

        Ok(InvoiceSubmission {
            invoice_number: draft.invoice_number.clone(),
            date: draft.date,
            invoice_type: draft.invoice_type.clone(),
            vendor_id: vendor.map(|v| v.id),
            vendor_name: vendor.map(|v| v.name.clone()).unwrap_or_default(),
            vendor_address: vendor.map(|v| v.address.clone()).unwrap_or_default(),
            vendor_contact: vendor.map(|v| v.contact.clone()).unwrap_or_default(),
            hst_gst_number: draft.hst_gst_number.clone(),
            shipping_method: draft.shipping_method.clone(),
            shipping_terms: draft.shipping_terms.clone(),
            delivery_date: draft.delivery_date.clone(),
            comments: draft.comments.clone(),
            terms_conditions: draft.terms_conditions.clone(),
            signature,
            tax_rate,
            shipping_cost,
            notes: String::new(),
            items,
            template: draft.template,
        })
    }
}
