//! Interactive chat loop and one-shot mode.

use std::path::PathBuf;

use lumen_ai::{AiClient, AttachmentKind, ChatView, ConversationSession, ReadTicket};
use lumen_common::LumenError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::attach;
use crate::terminal::TerminalView;

const HELP: &str = "\
Commands:
  /image <path>   attach an image to the next message
  /file <path>    attach a document (.txt, .pdf, .doc, .docx)
  /remove         drop the staged attachment
  /reset          start a new conversation
  /help           show this help
  /quit           exit
Anything else is sent as a message.";

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Image(String),
    File(String),
    Remove,
    Reset,
    Help,
    Quit,
    /// A command given without its required argument; holds the usage line.
    Usage(&'static str),
    Unknown(String),
    Say(String),
}

pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Say(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match (name, arg.is_empty()) {
        ("image", false) => Command::Image(arg.to_string()),
        ("image", true) => Command::Usage("/image <path>"),
        ("file", false) => Command::File(arg.to_string()),
        ("file", true) => Command::Usage("/file <path>"),
        ("remove", _) => Command::Remove,
        ("reset", _) => Command::Reset,
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of a background plain-text read.
#[derive(Debug)]
pub struct TextRead {
    ticket: ReadTicket,
    path: PathBuf,
    result: Result<String, LumenError>,
}

/// A session plus the terminal it renders to.
pub struct Chat<W: std::io::Write> {
    pub session: ConversationSession,
    pub view: TerminalView<W>,
    max_file_bytes: u64,
    read_tx: mpsc::UnboundedSender<TextRead>,
    reads: mpsc::UnboundedReceiver<TextRead>,
}

impl<W: std::io::Write> Chat<W> {
    pub fn new(view: TerminalView<W>, max_file_bytes: u64) -> Self {
        let (read_tx, reads) = mpsc::unbounded_channel();
        Self {
            session: ConversationSession::new(),
            view,
            max_file_bytes,
            read_tx,
            reads,
        }
    }

    pub async fn handle_line(&mut self, line: &str, client: &dyn AiClient) -> Flow {
        match parse_command(line) {
            Command::Say(text) => {
                self.finish_pending_read().await;
                if let Err(e) = self.session.submit(&text, client, &mut self.view).await {
                    debug!(error = %e, "submission failed");
                }
            }
            Command::Image(path) => self.attach(&path, AttachmentKind::Image).await,
            Command::File(path) => self.attach(&path, AttachmentKind::File).await,
            Command::Remove => {
                self.session.clear_attachments();
                self.view.info("attachment removed");
            }
            Command::Reset => {
                self.session.reset();
                self.view.info("new conversation");
            }
            Command::Help => self.view.info(HELP),
            Command::Usage(usage) => self.view.info(&format!("usage: {usage}")),
            Command::Unknown(name) => {
                self.view.info(&format!("unknown command /{name}, try /help"));
            }
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Select a file and stage it. A plain-text document starts a
    /// background read; its result is applied by `apply_read`.
    pub async fn attach(&mut self, raw_path: &str, kind: AttachmentKind) {
        let path = attach::expand_home(raw_path);
        let file = match attach::select(&path, kind, self.max_file_bytes).await {
            Ok(f) => f,
            Err(e) => {
                // Selection failed before staging; the slot is left as is.
                self.view.info(&format!("error: {e}"));
                return;
            }
        };

        let name = file.name.clone();
        if let Err(e) = self.session.stage_attachment(kind, file) {
            self.view.show_error(&e);
            return;
        }
        self.view.info(&format!("attached: {name}"));

        if let Some(ticket) = self.session.pending_read() {
            let tx = self.read_tx.clone();
            tokio::spawn(async move {
                let result = attach::read_text(&path).await;
                let _ = tx.send(TextRead {
                    ticket,
                    path,
                    result,
                });
            });
        }
    }

    pub fn apply_read(&mut self, read: TextRead) {
        match read.result {
            Ok(content) => {
                if !self.session.complete_text_read(read.ticket, content) {
                    debug!(path = %read.path.display(), "text read arrived after attachment changed");
                }
            }
            Err(e) => {
                warn!(path = %read.path.display(), error = %e, "text read failed");
                // Nothing else will resolve this ticket.
                if self.session.pending_read() == Some(read.ticket) {
                    self.session.clear_attachments();
                }
                self.view.info(&format!("error: could not read {}: {e}", read.path.display()));
            }
        }
    }

    /// Wait until the staged plain-text file, if any, has been read.
    ///
    /// Reads for attachments that were removed or replaced may arrive
    /// first; they are applied (and discarded) along the way.
    pub async fn finish_pending_read(&mut self) {
        while self.session.pending_read().is_some() {
            match self.reads.recv().await {
                Some(read) => self.apply_read(read),
                None => break,
            }
        }
    }
}

/// Run the interactive loop on stdin until `/quit` or end of input.
pub async fn run_interactive(client: &dyn AiClient, max_file_bytes: u64) {
    let view = TerminalView::new(std::io::stdout(), false);
    let mut chat = Chat::new(view, max_file_bytes);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(session = %chat.session.id().short(), "chat started");
    chat.view.info("Chatting with Gemini. Type /help for commands.");
    chat.view.prompt();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if chat.handle_line(&line, client).await == Flow::Quit {
                            break;
                        }
                        chat.view.prompt();
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "failed to read stdin");
                        break;
                    }
                }
            }
            Some(read) = chat.reads.recv() => chat.apply_read(read),
        }
    }

    info!("chat ended");
}

/// Send a single message, optionally with one attachment, and report
/// whether it got a reply.
pub async fn run_once(
    client: &dyn AiClient,
    message: &str,
    attachment: Option<(AttachmentKind, PathBuf)>,
    max_file_bytes: u64,
) -> bool {
    let view = TerminalView::new(std::io::stdout(), true);
    let mut chat = Chat::new(view, max_file_bytes);

    if let Some((kind, path)) = attachment {
        chat.attach(&path.to_string_lossy(), kind).await;
        chat.finish_pending_read().await;
        if chat.session.attachment().is_none() {
            return false;
        }
    }

    match chat.session.submit(message, client, &mut chat.view).await {
        Ok(outcome) => {
            debug!(?outcome, "one-shot finished");
            true
        }
        Err(_) => false,
    }
}
