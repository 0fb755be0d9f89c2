use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::invoice_aggregator::InvoiceAggregator;
use crate::core::{PricingDefaults, ValidationError};
use crate::modules::invoices::models::{
    DraftState, InvoiceTemplate, InvoiceTotals, LineItemInput, Unit,
};

/// A field on one item row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemField {
    LotNumber(String),
    Description(String),
    Quantity(String),
    /// Unit name as picked in the form ("Gram", "kg", ...)
    Unit(String),
    UnitPrice(String),
}

/// Free-text fields carried onto the invoice unmodified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    HstGstNumber,
    Comments,
    TermsConditions,
    ShippingMethod,
    ShippingTerms,
    DeliveryDate,
}

/// Every edit the invoice form can make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    AddRow,
    RemoveRow(usize),
    SetItem { index: usize, field: ItemField },
    SetTaxRate(String),
    SetShippingCost(String),
    SelectVendor(Option<i64>),
    SelectSignature(Option<i64>),
    SetInvoiceNumber(String),
    SetDate(NaiveDate),
    SetInvoiceType(String),
    SetTemplate(InvoiceTemplate),
    SetMeta { field: MetaField, value: Option<String> },
}

/// Owns the draft while it is being edited and keeps its totals current.
///
/// Totals are recomputed after every successful action. A rejected action
/// leaves the draft exactly as it was.
#[derive(Debug, Clone)]
pub struct DraftEditor {
    draft: DraftState,
    aggregator: InvoiceAggregator,
    totals: InvoiceTotals,
    revision: u64,
}

impl DraftEditor {
    pub fn new(draft: DraftState, defaults: PricingDefaults) -> Self {
        let aggregator = InvoiceAggregator::new(defaults);
        let totals = aggregator.compute_draft_totals(&draft);
        Self {
            draft,
            aggregator,
            totals,
            revision: 0,
        }
    }

    pub fn apply(&mut self, action: DraftAction) -> Result<&InvoiceTotals, ValidationError> {
        debug!(?action, revision = self.revision, "Applying draft action");

        match action {
            DraftAction::AddRow => self.draft.items.push(LineItemInput::default()),
            DraftAction::RemoveRow(index) => {
                self.check_index(index)?;
                self.draft.items.remove(index);
            }
            DraftAction::SetItem { index, field } => {
                self.check_index(index)?;
                // Parse before touching the row so a bad unit changes nothing
                let unit = match &field {
                    ItemField::Unit(raw) => Some(
                        raw.parse::<Unit>()
                            .map_err(ValidationError::InvalidInput)?,
                    ),
                    _ => None,
                };

                let row = &mut self.draft.items[index];
                match field {
                    ItemField::LotNumber(v) => row.lot_number = v,
                    ItemField::Description(v) => row.description = v,
                    ItemField::Quantity(v) => row.quantity = v,
                    ItemField::UnitPrice(v) => row.unit_price = v,
                    ItemField::Unit(_) => {
                        if let Some(unit) = unit {
                            row.unit = unit;
                        }
                    }
                }
            }
            DraftAction::SetTaxRate(v) => self.draft.tax_rate = v,
            DraftAction::SetShippingCost(v) => self.draft.shipping_cost = v,
            DraftAction::SelectVendor(id) => self.draft.vendor_id = id,
            DraftAction::SelectSignature(id) => self.draft.signature_id = id,
            DraftAction::SetInvoiceNumber(v) => self.draft.invoice_number = v,
            DraftAction::SetDate(date) => self.draft.date = date,
            DraftAction::SetInvoiceType(v) => self.draft.invoice_type = v,
            DraftAction::SetTemplate(template) => self.draft.template = template,
            DraftAction::SetMeta { field, value } => {
                let slot = match field {
                    MetaField::HstGstNumber => &mut self.draft.hst_gst_number,
                    MetaField::Comments => &mut self.draft.comments,
                    MetaField::TermsConditions => &mut self.draft.terms_conditions,
                    MetaField::ShippingMethod => &mut self.draft.shipping_method,
                    MetaField::ShippingTerms => &mut self.draft.shipping_terms,
                    MetaField::DeliveryDate => &mut self.draft.delivery_date,
                };
                *slot = value;
            }
        }

        self.revision += 1;
        self.totals = self.aggregator.compute_draft_totals(&self.draft);
        Ok(&self.totals)
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.draft.items.len() {
            return Err(ValidationError::InvalidInput(format!(
                "No item row {}",
                index
            )));
        }
        Ok(())
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    /// Per-row totals in row order, for the "Total" column
    pub fn line_totals(&self) -> Vec<Decimal> {
        self.draft
            .line_items()
            .iter()
            .map(|item| item.line_total())
            .collect()
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    /// Number of actions applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
