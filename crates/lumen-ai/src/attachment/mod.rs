//! Attachment staging types and the content policy applied to selected files.

mod policy;

pub use policy::{
    accepts_file, accepts_image, is_plain_text, ACCEPTED_FILE_EXTENSIONS, ACCEPTED_FILE_TYPES,
};

/// Which picker the file came from. Each has its own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    File,
}

/// A file the user picked, with the media type its source declared.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    /// Raw contents. Only images are encoded from here; plain-text files
    /// are read separately and delivered through `complete_text_read`.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// The staging slot. Holds at most one attachment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttachmentState {
    #[default]
    None,
    Image {
        mime_type: String,
        base64_data: String,
        file_name: String,
    },
    /// Plain-text file whose contents are still being read.
    PendingText { file_name: String, generation: u64 },
    InlineText {
        file_name: String,
        text_content: String,
    },
    /// Accepted document that cannot be forwarded to the provider.
    OpaqueFile { file_name: String },
}

impl AttachmentState {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Image { file_name, .. }
            | Self::PendingText { file_name, .. }
            | Self::InlineText { file_name, .. }
            | Self::OpaqueFile { file_name } => Some(file_name),
        }
    }
}

/// Handed out when a plain-text file is staged; redeemed with the file's
/// contents once the read finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket {
    pub(crate) generation: u64,
}
