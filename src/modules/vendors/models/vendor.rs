use serde::{Deserialize, Serialize};

use crate::core::wire::null_as_default;
use crate::core::ValidationError;

/// A vendor (customer or supplier) that invoices are addressed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,

    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: String,
}

/// Fields sent when creating or updating a vendor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorDetails {
    pub name: String,
    pub address: String,
    pub contact: String,
}

impl VendorDetails {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact: contact.into(),
        }
    }

    /// A vendor needs a name; address and contact may be blank
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidInput(
                "Vendor name is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Vendor> for VendorDetails {
    fn from(vendor: &Vendor) -> Self {
        Self {
            name: vendor.name.clone(),
            address: vendor.address.clone(),
            contact: vendor.contact.clone(),
        }
    }
}
