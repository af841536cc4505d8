//! Reading local files into `SelectedFile`s for the session.
//!
//! The declared media type comes from the file extension, the way a browser
//! file picker reports it. Images with an unknown extension fall back to
//! magic-byte sniffing.

use std::path::{Path, PathBuf};

use lumen_ai::{AttachmentKind, SelectedFile};
use lumen_common::LumenError;

/// Image file magic bytes for sniffing.
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const GIF_MAGIC: &[u8] = &[0x47, 0x49, 0x46];
const WEBP_MAGIC: &[u8] = b"RIFF";
const BMP_MAGIC: &[u8] = &[0x42, 0x4D];

/// Reported when nothing better is known. Fails both picker policies.
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Detect an image MIME type from magic bytes.
fn detect_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() < 4 {
        return None;
    }
    if bytes.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else if bytes.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if bytes.starts_with(GIF_MAGIC) {
        Some("image/gif")
    } else if bytes.len() >= 12 && bytes.starts_with(WEBP_MAGIC) && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(BMP_MAGIC) {
        Some("image/bmp")
    } else {
        None
    }
}

/// Media type a file picker would declare for `path`.
pub fn guess_media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "txt" | "text" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    };
    Some(mime)
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

/// Read `path` as a selection from the `kind` picker.
///
/// Image bytes are read here. Documents are only checked for size; the
/// contents of a plain-text document are read later with [`read_text`].
pub async fn select(
    path: &Path,
    kind: AttachmentKind,
    max_bytes: u64,
) -> Result<SelectedFile, LumenError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| LumenError::Attachment(format!("{}: {e}", path.display())))?;

    if !metadata.is_file() {
        return Err(LumenError::Attachment(format!(
            "{}: not a regular file",
            path.display()
        )));
    }
    if metadata.len() > max_bytes {
        return Err(LumenError::Attachment(format!(
            "{}: file too large (max {} MB)",
            path.display(),
            max_bytes / (1024 * 1024)
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let declared = guess_media_type(path);

    let file = match kind {
        AttachmentKind::Image => {
            let bytes = tokio::fs::read(path).await?;
            let media_type = declared
                .or_else(|| detect_mime(&bytes))
                .unwrap_or(UNKNOWN_MEDIA_TYPE);
            SelectedFile::new(name, media_type, bytes)
        }
        AttachmentKind::File => {
            SelectedFile::new(name, declared.unwrap_or(UNKNOWN_MEDIA_TYPE), Vec::new())
        }
    };

    tracing::debug!(file = %file.name, media_type = %file.media_type, "file selected");
    Ok(file)
}

/// Read a plain-text document. Invalid UTF-8 is replaced, not rejected.
pub async fn read_text(path: &Path) -> Result<String, LumenError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
