//! Submission outcome and the working-state guard.

use super::view::ChatView;

/// What `submit` did with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to send.
    Nothing,
    /// Ignored because a reply is still pending.
    Busy,
    /// A file was acknowledged locally without a network call.
    Acknowledged { file_name: String },
    /// The provider replied and the reply is in the transcript.
    Replied(String),
}

/// Shows the working indicator and disables input for as long as it lives.
///
/// The indicator is hidden by `settle` or on drop, whichever comes first,
/// and input is re-enabled on drop, so each happens exactly once even if
/// the request future is dropped mid-flight.
pub(crate) struct WorkingGuard<'a> {
    view: &'a mut dyn ChatView,
    indicator_shown: bool,
}

impl<'a> WorkingGuard<'a> {
    pub(crate) fn engage(view: &'a mut dyn ChatView) -> Self {
        view.set_input_enabled(false);
        view.set_working(true);
        Self {
            view,
            indicator_shown: true,
        }
    }

    /// Hide the indicator now; input stays disabled until drop.
    pub(crate) fn settle(&mut self) {
        if self.indicator_shown {
            self.view.set_working(false);
            self.indicator_shown = false;
        }
    }

    pub(crate) fn view(&mut self) -> &mut (dyn ChatView + 'a) {
        &mut *self.view
    }
}

impl Drop for WorkingGuard<'_> {
    fn drop(&mut self) {
        self.settle();
        self.view.set_input_enabled(true);
    }
}
