//! Turning the input box and the staged attachment into a user turn.

use tracing::{debug, info};

use crate::attachment::AttachmentState;
use crate::turn::{Role, Segment, Turn};

use super::manager::ConversationSession;

/// What a submission became.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// Nothing typed and nothing staged.
    Empty,
    /// A previous turn is still waiting for its reply.
    Busy,
    /// A user turn was appended to the transcript and must be sent.
    Send(Turn),
    /// The staged file cannot be forwarded; answered locally instead.
    Acknowledged { file_name: String, notice: String },
}

impl ConversationSession {
    /// Decide what `text` plus the staged attachment turns into.
    ///
    /// `Send` appends the turn and marks the session in flight until the
    /// reply is reconciled. Every outcome except `Busy` consumes the staged
    /// attachment; `Empty` only happens when nothing was staged.
    pub fn compose_turn(&mut self, text: &str) -> Composition {
        if self.in_flight {
            debug!("submission ignored: reply pending");
            return Composition::Busy;
        }

        let text = text.trim();
        let attachment = std::mem::take(&mut self.attachment);
        self.clear_attachments();

        let mut segments = Vec::new();
        if !text.is_empty() {
            segments.push(Segment::text(text));
        }

        match attachment {
            AttachmentState::None => {}
            AttachmentState::Image {
                mime_type,
                base64_data,
                ..
            } => segments.push(Segment::inline_binary(mime_type, base64_data)),
            AttachmentState::InlineText { text_content, .. } if !text_content.is_empty() => {
                segments.push(Segment::text(text_content));
            }
            AttachmentState::InlineText { file_name, .. }
            | AttachmentState::PendingText { file_name, .. }
            | AttachmentState::OpaqueFile { file_name } => {
                // Images and documents share one slot, so an opaque file
                // never arrives alongside an image.
                return self.acknowledge(file_name, text.is_empty());
            }
        }

        // No text and nothing staged leaves no segments.
        let Some(turn) = Turn::new(Role::User, segments) else {
            debug!("no input, image, or file to send");
            return Composition::Empty;
        };
        self.commit_user_turn(turn.clone());
        self.in_flight = true;
        Composition::Send(turn)
    }

    /// Append a user turn to the transcript as-is.
    pub fn commit_user_turn(&mut self, turn: Turn) {
        debug!(
            segments = turn.segments().len(),
            turns = self.transcript.len() + 1,
            "user turn committed"
        );
        self.transcript.push(turn);
    }

    fn acknowledge(&mut self, file_name: String, nothing_else: bool) -> Composition {
        if nothing_else {
            // A file on its own never reaches the transcript; start clean.
            info!(turns = self.transcript.len(), "transcript reset after file-only submission");
            self.transcript.clear();
        }
        let notice = format!(
            "Acknowledged: \"{file_name}\". Processing the contents of this file requires a backend service."
        );
        Composition::Acknowledged { file_name, notice }
    }
}
