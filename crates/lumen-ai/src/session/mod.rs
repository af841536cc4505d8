//! Conversation session management.
//!
//! A `ConversationSession` owns the transcript and the attachment slot,
//! decides what a submission turns into, and folds provider replies back
//! into the transcript.

mod chat;
mod compose;
mod manager;
mod reconcile;
mod types;
mod view;


pub use compose::Composition;
pub use manager::ConversationSession;
pub use reconcile::NO_RESPONSE_MESSAGE;
pub use types::SubmitOutcome;
pub use view::ChatView;
