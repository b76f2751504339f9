//! Image files attached to catalog forms.

use std::path::Path;

use glamping_api::payload::Upload;

use crate::error::AdminError;

/// Reads an image from disk into an [`Upload`].
pub fn load_upload(path: &Path) -> Result<Upload, AdminError> {
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::warn!("failed to read image {}: {}", path.display(), e);
        AdminError::Io(e)
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok(Upload {
        mime: mime_for(path).map(str::to_string),
        file_name,
        bytes,
    })
}

/// Content type guessed from the file extension.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
