use serde::{Deserialize, Serialize};

use crate::core::paths;

/// Company profile printed on every invoice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySettings {
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_phone: Option<String>,
    pub default_logo_path: Option<String>,
    pub default_logo_url: Option<String>,
    pub default_shipping_method: Option<String>,
    pub default_shipping_terms: Option<String>,
}

impl CompanySettings {
    /// Link to the stored logo, if any
    pub fn logo_link(&self) -> Option<String> {
        self.default_logo_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .map(|u| {
                if u.starts_with('/') {
                    u.to_string()
                } else {
                    paths::logo_link(u)
                }
            })
            .or_else(|| {
                self.default_logo_path
                    .as_deref()
                    .filter(|p| !p.trim().is_empty())
                    .map(paths::logo_link)
            })
    }

    /// Payload that saves these settings unchanged. The logo is sent as its
    /// URL; the backend keeps its stored path when it sees one.
    pub fn to_update(&self) -> CompanySettingsUpdate {
        CompanySettingsUpdate {
            company_name: self.company_name.clone().unwrap_or_default(),
            company_address: self.company_address.clone().unwrap_or_default(),
            company_phone: self.company_phone.clone().unwrap_or_default(),
            default_logo_path: self.logo_link(),
            default_shipping_method: self.default_shipping_method.clone().unwrap_or_default(),
            default_shipping_terms: self.default_shipping_terms.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /api/settings/company`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettingsUpdate {
    pub company_name: String,
    pub company_address: String,
    pub company_phone: String,
    pub default_logo_path: Option<String>,
    pub default_shipping_method: String,
    pub default_shipping_terms: String,
}
