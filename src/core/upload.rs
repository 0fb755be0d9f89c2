use std::path::Path;

use crate::core::{AppError, Result, ValidationError};

/// An image file to be sent as a multipart part (signatures, company logo)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing the content type from its extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::invalid_input("Upload path has no file name"))?
            .to_string();
        let content_type = content_type_for(path).to_string();
        let bytes = std::fs::read(path)?;

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// The backend only stores images
    pub fn ensure_image(&self) -> std::result::Result<(), ValidationError> {
        if self.file_name.trim().is_empty() {
            return Err(ValidationError::InvalidInput("No file selected".to_string()));
        }
        if !self.content_type.starts_with("image/") {
            return Err(ValidationError::InvalidInput(
                "File must be an image".to_string(),
            ));
        }
        Ok(())
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
