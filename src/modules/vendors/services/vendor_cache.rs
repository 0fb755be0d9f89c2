use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::core::SubmissionError;
use crate::modules::gateways::VendorApi;
use crate::modules::vendors::models::Vendor;

/// In-memory copy of the vendor list.
///
/// Filled only by an explicit [`refresh`](Self::refresh); lookups never hit
/// the backend. A failed refresh keeps the previous contents.
#[derive(Debug, Clone, Default)]
pub struct VendorCache {
    vendors: Vec<Vendor>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl VendorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with a known list
    pub fn from_vendors(vendors: Vec<Vendor>) -> Self {
        Self {
            vendors,
            refreshed_at: Some(Utc::now()),
        }
    }

    /// Reload the vendor list from the backend; returns the vendor count
    pub async fn refresh(&mut self, api: &dyn VendorApi) -> Result<usize, SubmissionError> {
        match api.list_vendors().await {
            Ok(vendors) => {
                debug!(count = vendors.len(), "Vendor cache refreshed");
                self.vendors = vendors;
                self.refreshed_at = Some(Utc::now());
                Ok(self.vendors.len())
            }
            Err(e) => {
                warn!(error = %e, "Vendor refresh failed, keeping cached list");
                Err(e)
            }
        }
    }

    pub fn find(&self, id: i64) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    /// Vendors in backend order (alphabetical by name)
    pub fn all(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn is_loaded(&self) -> bool {
        self.refreshed_at.is_some()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }
}
