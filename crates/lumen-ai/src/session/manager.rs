//! Session struct, attachment staging and lifecycle.

use base64::Engine as _;
use lumen_common::SessionId;
use tracing::{debug, info, warn};

use crate::attachment::{
    accepts_file, accepts_image, is_plain_text, AttachmentKind, AttachmentState, ReadTicket,
    SelectedFile,
};
use crate::turn::Turn;
use crate::ChatError;

/// One chat session: the transcript plus the staged attachment.
pub struct ConversationSession {
    pub(super) id: SessionId,
    /// Every committed turn, oldest first.
    pub(super) transcript: Vec<Turn>,
    pub(super) attachment: AttachmentState,
    /// Bumped on every stage and clear so late text reads can be recognised.
    pub(super) generation: u64,
    /// A composed user turn is waiting for its reply.
    pub(super) in_flight: bool,
}

impl ConversationSession {
    pub fn new() -> Self {
        let id = SessionId::new();
        debug!(session = %id.short(), "conversation session created");
        Self {
            id,
            transcript: Vec::new(),
            attachment: AttachmentState::None,
            generation: 0,
            in_flight: false,
        }
    }

    /// Validate `file` against the policy for `kind` and stage it.
    ///
    /// Any previously staged attachment is dropped first, including when
    /// the new file is rejected.
    pub fn stage_attachment(
        &mut self,
        kind: AttachmentKind,
        file: SelectedFile,
    ) -> Result<&AttachmentState, ChatError> {
        self.clear_attachments();

        let staged = match kind {
            AttachmentKind::Image => {
                if !accepts_image(&file.media_type) {
                    warn!(file = %file.name, media_type = %file.media_type, "rejected image");
                    return Err(ChatError::Validation("unsupported image type".into()));
                }
                let base64_data = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
                debug!(
                    file = %file.name,
                    mime_type = %file.media_type,
                    base64_len = base64_data.len(),
                    "image attached"
                );
                AttachmentState::Image {
                    mime_type: file.media_type,
                    base64_data,
                    file_name: file.name,
                }
            }
            AttachmentKind::File => {
                if !accepts_file(&file.name, &file.media_type) {
                    warn!(file = %file.name, media_type = %file.media_type, "rejected file");
                    return Err(ChatError::Validation("unsupported file type".into()));
                }
                if is_plain_text(&file.media_type) {
                    debug!(file = %file.name, generation = self.generation, "awaiting text read");
                    AttachmentState::PendingText {
                        file_name: file.name,
                        generation: self.generation,
                    }
                } else {
                    debug!(file = %file.name, "document attached");
                    AttachmentState::OpaqueFile {
                        file_name: file.name,
                    }
                }
            }
        };

        self.attachment = staged;
        Ok(&self.attachment)
    }

    /// Ticket for the plain-text read the staged attachment is waiting on.
    pub fn pending_read(&self) -> Option<ReadTicket> {
        match self.attachment {
            AttachmentState::PendingText { generation, .. } => Some(ReadTicket { generation }),
            _ => None,
        }
    }

    /// Deliver the contents of a plain-text file.
    ///
    /// Returns `false` and drops `content` if the attachment the ticket was
    /// issued for has since been cleared or replaced.
    pub fn complete_text_read(&mut self, ticket: ReadTicket, content: String) -> bool {
        match &self.attachment {
            AttachmentState::PendingText {
                file_name,
                generation,
            } if *generation == ticket.generation => {
                let file_name = file_name.clone();
                debug!(file = %file_name, chars = content.len(), "text read completed");
                self.attachment = AttachmentState::InlineText {
                    file_name,
                    text_content: content,
                };
                true
            }
            _ => {
                debug!(generation = ticket.generation, "discarding stale text read");
                false
            }
        }
    }

    pub fn clear_attachments(&mut self) {
        if !self.attachment.is_none() {
            debug!("attachments cleared");
        }
        self.attachment = AttachmentState::None;
        self.generation += 1;
    }

    /// Forget the transcript and any staged attachment.
    pub fn reset(&mut self) {
        info!(session = %self.id.short(), turns = self.transcript.len(), "session reset");
        self.transcript.clear();
        self.clear_attachments();
        self.in_flight = false;
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn attachment(&self) -> &AttachmentState {
        &self.attachment
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
