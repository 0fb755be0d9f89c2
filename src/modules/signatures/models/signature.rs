use serde::{Deserialize, Serialize};

use crate::core::paths;
use crate::core::wire::{bool_from_flag, null_as_default};
use crate::modules::invoices::models::SignatureRef;

/// Name assigned to an uploaded signature when none is given
pub const DEFAULT_SIGNATURE_NAME: &str = "Unknown";

/// A signature image that can be printed on invoices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub id: i64,

    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,

    /// Stored image location; the backend already strips directories, but
    /// older rows may still carry a full path
    pub image_path: String,

    #[serde(default, deserialize_with = "bool_from_flag")]
    pub is_default: bool,
}

impl Signature {
    pub fn image_file_name(&self) -> String {
        paths::display_file_name(&self.image_path)
    }

    pub fn image_link(&self) -> String {
        paths::signature_image_link(&self.image_path)
    }

    /// "Name (Position)" as shown in the signature dropdown
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.position)
    }

    /// Reference attached to an invoice submission
    pub fn to_ref(&self) -> SignatureRef {
        SignatureRef {
            id: self.id,
            name: self.name.clone(),
            position: self.position.clone(),
            image: self.image_file_name(),
        }
    }
}

/// Name and position for a new or edited signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDetails {
    pub name: String,
    pub position: String,
}

impl SignatureDetails {
    /// Blank names become "Unknown"
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_SIGNATURE_NAME.to_string()
        } else {
            name
        };

        Self {
            name,
            position: position.into(),
        }
    }
}
