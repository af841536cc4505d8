//! Plain-text `ChatView` writing to a terminal.

use std::io::Write;

use lumen_ai::{ChatError, ChatView, Segment, Turn};

const WORKING_LINE: &str = "gemini is thinking...";

/// Renders the conversation as labelled lines.
pub struct TerminalView<W: Write> {
    out: W,
    /// Echo user turns. Off in the REPL, where the user just typed them.
    echo_user: bool,
    input_enabled: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, echo_user: bool) -> Self {
        Self {
            out,
            echo_user,
            input_enabled: true,
        }
    }

    pub fn prompt(&mut self) {
        if self.input_enabled {
            let _ = write!(self.out, "> ");
            let _ = self.out.flush();
        }
    }

    /// Print a line that is not part of the conversation (help, status).
    pub fn info(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatView for TerminalView<W> {
    fn show_user_turn(&mut self, turn: &Turn) {
        for segment in turn.segments() {
            match segment {
                Segment::Text { value } if self.echo_user => {
                    let _ = writeln!(self.out, "you: {value}");
                }
                Segment::Text { .. } => {}
                Segment::InlineBinary { mime_type, data } => {
                    let _ = writeln!(
                        self.out,
                        "     [{mime_type}, {} bytes base64]",
                        data.len()
                    );
                }
            }
        }
    }

    fn show_reply(&mut self, text: &str) {
        let _ = writeln!(self.out, "gemini: {text}");
    }

    fn show_notice(&mut self, text: &str) {
        let _ = writeln!(self.out, "gemini: {text}");
    }

    fn show_error(&mut self, error: &ChatError) {
        let _ = writeln!(self.out, "error: {error}");
    }

    fn set_working(&mut self, working: bool) {
        if working {
            let _ = write!(self.out, "{WORKING_LINE}");
        } else {
            // Overwrite the indicator in place.
            let _ = write!(self.out, "\r{}\r", " ".repeat(WORKING_LINE.len()));
        }
        let _ = self.out.flush();
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }
}
