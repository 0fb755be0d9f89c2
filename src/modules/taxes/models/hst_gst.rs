use serde::{Deserialize, Serialize};

use crate::core::ValidationError;

/// The company's HST/GST registration number as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HstGstSettings {
    #[serde(default)]
    pub default_hst_gst: Option<String>,

    #[serde(default)]
    pub current: Option<String>,
}

impl HstGstSettings {
    /// The number to preselect on new invoices; blank counts as none
    pub fn number(&self) -> Option<&str> {
        self.current
            .as_deref()
            .or(self.default_hst_gst.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// A registration number entered by the user
pub fn validate_number(number: &str) -> Result<&str, ValidationError> {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidInput(
            "No HST/GST number provided".to_string(),
        ));
    }
    Ok(trimmed)
}
