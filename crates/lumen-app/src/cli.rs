use std::path::PathBuf;

use clap::Parser;

/// Lumen: a terminal chat client for Google Gemini.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Send one message and exit instead of starting a chat.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Image to attach to the one-shot message.
    #[arg(long, requires = "message", conflicts_with = "file")]
    pub image: Option<PathBuf>,

    /// Document to attach to the one-shot message.
    #[arg(long, requires = "message")]
    pub file: Option<PathBuf>,

    /// List the models the API key can use, then exit.
    #[arg(long)]
    pub list_models: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
