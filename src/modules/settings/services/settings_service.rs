use std::sync::Arc;

use tracing::{error, info};

use crate::core::{ImageUpload, Result};
use crate::modules::gateways::SettingsApi;
use crate::modules::settings::models::{CompanySettings, CompanySettingsUpdate};
use crate::modules::taxes::models::validate_number;
use crate::modules::taxes::HstGstSettings;

pub struct SettingsService {
    api: Arc<dyn SettingsApi>,
}

impl SettingsService {
    pub fn new(api: Arc<dyn SettingsApi>) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<CompanySettings> {
        Ok(self.api.company_settings().await?)
    }

    pub async fn save(&self, update: &CompanySettingsUpdate) -> Result<()> {
        self.api.update_company_settings(update).await.map_err(|e| {
            error!(error = %e, "Failed to save company settings");
            e
        })?;
        info!(company = %update.company_name, "Company settings saved");
        Ok(())
    }

    /// Upload a new logo; returns the URL it is served from
    pub async fn upload_logo(&self, upload: ImageUpload) -> Result<String> {
        upload.ensure_image()?;

        let file_name = upload.file_name.clone();
        let url = self.api.upload_logo(upload).await?;
        info!(file = %file_name, url = %url, "Logo uploaded");
        Ok(url)
    }

    pub async fn hst_gst(&self) -> Result<HstGstSettings> {
        Ok(self.api.hst_gst_settings().await?)
    }

    pub async fn set_hst_gst(&self, number: &str) -> Result<()> {
        let number = validate_number(number)?;
        self.api.set_hst_gst_number(number).await?;
        info!(number = %number, "Default HST/GST number saved");
        Ok(())
    }

    pub async fn clear_hst_gst(&self) -> Result<()> {
        self.api.set_hst_gst_number("").await?;
        info!("Default HST/GST number cleared");
        Ok(())
    }
}
