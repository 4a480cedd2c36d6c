//! MIME type lookup by file extension.

use std::path::Path;

/// Fallback for extensions outside the table.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// MIME type for a lowercase extension, if it is a known image format.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        "bmp" => "image/bmp",
        "exr" => "image/x-exr",
        "ico" => "image/x-icon",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => return None,
    };
    Some(mime)
}

/// MIME type for a file path. Case-insensitive on the extension.
pub fn mime_type(path: impl AsRef<Path>) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension)
        .unwrap_or(OCTET_STREAM)
}
