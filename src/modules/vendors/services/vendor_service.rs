use std::sync::Arc;

use tracing::{error, info, warn};

use super::vendor_cache::VendorCache;
use crate::core::Result;
use crate::modules::gateways::VendorApi;
use crate::modules::vendors::models::VendorDetails;

/// Vendor management: each change is sent to the backend and then the cache
/// is reloaded so lists and dropdowns show the stored state.
///
/// Once the backend accepts a change the call succeeds. A failed reload only
/// leaves the cache stale until the next refresh.
pub struct VendorService {
    api: Arc<dyn VendorApi>,
}

impl VendorService {
    pub fn new(api: Arc<dyn VendorApi>) -> Self {
        Self { api }
    }

    /// Create a vendor; returns the new id
    pub async fn add_vendor(&self, cache: &mut VendorCache, details: VendorDetails) -> Result<i64> {
        details.validate()?;

        let id = self.api.create_vendor(&details).await.map_err(|e| {
            error!(name = %details.name, error = %e, "Failed to add vendor");
            e
        })?;
        info!(vendor_id = id, name = %details.name, "Vendor added");

        self.reload(cache).await;
        Ok(id)
    }

    pub async fn update_vendor(
        &self,
        cache: &mut VendorCache,
        id: i64,
        details: VendorDetails,
    ) -> Result<()> {
        details.validate()?;

        self.api.update_vendor(id, &details).await?;
        info!(vendor_id = id, "Vendor updated");

        self.reload(cache).await;
        Ok(())
    }

    pub async fn delete_vendor(&self, cache: &mut VendorCache, id: i64) -> Result<()> {
        self.api.delete_vendor(id).await?;
        info!(vendor_id = id, "Vendor deleted");

        self.reload(cache).await;
        Ok(())
    }

    async fn reload(&self, cache: &mut VendorCache) {
        if let Err(e) = cache.refresh(self.api.as_ref()).await {
            warn!(error = %e, "Vendor change saved but the list could not be reloaded");
        }
    }
}
