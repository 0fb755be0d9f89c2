/// Backend paths may use either separator; both are normalized to `/`
/// before the final segment is taken.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Final path segment, for display and linking.
///
/// `C:\out\inv_001.pdf` and `/srv/pdfs/inv_001.pdf` both give `inv_001.pdf`.
/// A path ending in a separator yields an empty name.
pub fn display_file_name(path: &str) -> String {
    normalize_separators(path)
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Link to a generated invoice PDF
pub fn artifact_link(path: &str) -> String {
    format!("/pdfs/{}", display_file_name(path))
}

/// Link to an uploaded signature image
pub fn signature_image_link(path: &str) -> String {
    format!("/signatures/{}", display_file_name(path))
}

/// Link to the company logo, served from the web root
pub fn logo_link(path: &str) -> String {
    format!("/{}", display_file_name(path))
}
