//! Which files may be staged.

/// Declared media types accepted by the document picker.
pub const ACCEPTED_FILE_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Extensions accepted by the document picker regardless of declared type.
pub const ACCEPTED_FILE_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

pub fn accepts_image(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

pub fn accepts_file(name: &str, media_type: &str) -> bool {
    if ACCEPTED_FILE_TYPES.contains(&media_type) {
        return true;
    }
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ACCEPTED_FILE_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted))
    })
}

/// Only a declared `text/plain` is read inline; a `.txt` with any other
/// declared type is kept as an opaque file.
pub fn is_plain_text(media_type: &str) -> bool {
    media_type == "text/plain"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_policy_checks_prefix() {
        assert!(accepts_image("image/png"));
        assert!(accepts_image("image/svg+xml"));
        assert!(!accepts_image("application/pdf"));
        assert!(!accepts_image(""));
        assert!(!accepts_image("IMAGE/PNG"));
    }

    #[test]
    fn file_policy_accepts_declared_types() {
        for ty in ACCEPTED_FILE_TYPES {
            assert!(accepts_file("noextension", ty), "{ty} should be accepted");
        }
    }

    #[test]
    fn file_policy_accepts_extensions_case_insensitively() {
        assert!(accepts_file("Report.PDF", "application/octet-stream"));
        assert!(accepts_file("notes.TxT", ""));
        assert!(accepts_file("cv.docx", ""));
        assert!(accepts_file("old.Doc", ""));
    }

    #[test]
    fn file_policy_rejects_everything_else() {
        assert!(!accepts_file("report.exe", "application/x-msdownload"));
        assert!(!accepts_file("archive.pdf.zip", "application/zip"));
        assert!(!accepts_file("pdf", ""));
        assert!(!accepts_file("photo.png", "image/png"));
    }

    #[test]
    fn only_declared_plain_text_is_read() {
        assert!(is_plain_text("text/plain"));
        assert!(!is_plain_text("text/markdown"));
        assert!(!is_plain_text(""));
    }
}
