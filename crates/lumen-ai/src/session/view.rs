//! Rendering seam between the session and whatever front end shows it.

use crate::turn::Turn;
use crate::ChatError;

/// Front end driven by `ConversationSession::submit`.
pub trait ChatView {
    /// The user turn about to be sent.
    fn show_user_turn(&mut self, turn: &Turn);
    /// Assistant text; may contain markdown.
    fn show_reply(&mut self, text: &str);
    /// A locally generated assistant message.
    fn show_notice(&mut self, text: &str);
    fn show_error(&mut self, error: &ChatError);
    fn set_working(&mut self, working: bool);
    fn set_input_enabled(&mut self, enabled: bool);
}
