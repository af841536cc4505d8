//! Async submit: compose, send, reconcile.

use tracing::{debug, info_span, Instrument};

use crate::turn::Turn;
use crate::{AiClient, ChatError};

use super::compose::Composition;
use super::manager::ConversationSession;
use super::types::{SubmitOutcome, WorkingGuard};
use super::view::ChatView;

impl ConversationSession {
    /// Run one submission end to end.
    ///
    /// Validation of the input happens in `compose_turn`; only a `Send`
    /// composition reaches `client`. Provider and transport failures are
    /// shown through `view` and returned; the session stays usable.
    pub async fn submit(
        &mut self,
        text: &str,
        client: &dyn AiClient,
        view: &mut dyn ChatView,
    ) -> Result<SubmitOutcome, ChatError> {
        let turn = match self.compose_turn(text) {
            Composition::Empty => return Ok(SubmitOutcome::Nothing),
            Composition::Busy => return Ok(SubmitOutcome::Busy),
            Composition::Acknowledged { file_name, notice } => {
                let typed = text.trim();
                if !typed.is_empty() {
                    // Shown like any user message, but never sent.
                    debug!(file = %file_name, "text withheld with unprocessable file");
                    view.show_user_turn(&Turn::user_text(typed));
                }
                view.show_notice(&notice);
                return Ok(SubmitOutcome::Acknowledged { file_name });
            }
            Composition::Send(turn) => turn,
        };

        view.show_user_turn(&turn);
        let mut ui = WorkingGuard::engage(view);

        let span = info_span!("chat_request", session = %self.id.short(), turns = self.transcript.len());
        let result = client.send(&self.transcript).instrument(span).await;
        ui.settle();

        match self.reconcile(result) {
            Ok(reply) => {
                ui.view().show_reply(&reply);
                debug!(chars = reply.len(), "reply shown");
                Ok(SubmitOutcome::Replied(reply))
            }
            Err(e) => {
                ui.view().show_error(&e);
                Err(e)
            }
        }
    }
}
