use std::sync::Arc;

use tracing::{error, info, warn};

use super::signature_cache::SignatureCache;
use crate::core::{ImageUpload, Result};
use crate::modules::gateways::SignatureApi;
use crate::modules::signatures::models::{Signature, SignatureDetails};

/// Signature management. Every change reloads the cache afterwards; a
/// failed reload is logged and does not undo a change the backend stored.
pub struct SignatureService {
    api: Arc<dyn SignatureApi>,
}

impl SignatureService {
    pub fn new(api: Arc<dyn SignatureApi>) -> Self {
        Self { api }
    }

    /// Upload a signature image. The file must be an image; a blank name
    /// is stored as "Unknown".
    pub async fn upload(
        &self,
        cache: &mut SignatureCache,
        upload: ImageUpload,
        details: SignatureDetails,
    ) -> Result<Signature> {
        upload.ensure_image()?;

        let file_name = upload.file_name.clone();
        let signature = self
            .api
            .upload_signature(upload, &details)
            .await
            .map_err(|e| {
                error!(file = %file_name, error = %e, "Signature upload failed");
                e
            })?;
        info!(signature_id = signature.id, name = %signature.name, "Signature uploaded");

        self.reload(cache).await;
        Ok(signature)
    }

    pub async fn set_default(&self, cache: &mut SignatureCache, id: i64) -> Result<()> {
        self.api.set_default_signature(id).await?;
        info!(signature_id = id, "Default signature changed");

        self.reload(cache).await;
        Ok(())
    }

    pub async fn edit(
        &self,
        cache: &mut SignatureCache,
        id: i64,
        details: SignatureDetails,
    ) -> Result<()> {
        self.api.edit_signature(id, &details).await?;
        info!(signature_id = id, "Signature edited");

        self.reload(cache).await;
        Ok(())
    }

    pub async fn delete(&self, cache: &mut SignatureCache, id: i64) -> Result<()> {
        self.api.delete_signature(id).await?;
        info!(signature_id = id, "Signature deleted");

        self.reload(cache).await;
        Ok(())
    }

    async fn reload(&self, cache: &mut SignatureCache) {
        if let Err(e) = cache.refresh(self.api.as_ref()).await {
            warn!(error = %e, "Signature change saved but the list could not be reloaded");
        }
    }
}
