mod attach;
mod cli;
mod repl;
mod terminal;

use std::process::ExitCode;
use std::time::Duration;

use lumen_ai::{AttachmentKind, GeminiClient, GeminiConfig};
use lumen_config::LumenConfig;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/lumen-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// `RUST_LOG` wins, then `--log-level`, then `logging.level`.
fn log_filter(flag: Option<&str>, config: &LumenConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = match flag {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("lumen={level}"),
        None => config.logging.level.directive().to_string(),
    };
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("lumen=info"))
}

fn gemini_config(config: &LumenConfig) -> GeminiConfig {
    let provider = &config.provider;
    GeminiConfig::new(provider.api_key.clone())
        .with_model(provider.model.clone())
        .with_base_url(provider.base_url.clone())
        .with_timeout(Duration::from_secs(u64::from(provider.timeout_secs)))
        .with_connect_timeout(Duration::from_secs(u64::from(provider.connect_timeout_secs)))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging exists; report the failure once it does.
    let (config, config_error) = match lumen_config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => {
            let mut fallback = LumenConfig::default();
            lumen_config::apply_env_overrides(&mut fallback);
            (fallback, Some(e))
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(args.log_level.as_deref(), &config))
        .init();

    tracing::info!("Lumen v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!(config = %lumen_config::config_to_json(&config), "config loaded");

    let client = match GeminiClient::new(gemini_config(&config)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(model = %client.model(), "Gemini client ready");

    let max_file_bytes = config.attachments.max_file_size_bytes();

    if args.list_models {
        return match client.list_models().await {
            Ok(models) => {
                for model in models {
                    println!("{:<32} {}", model.id(), model.display_name);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    if let Some(message) = args.message.as_deref() {
        let attachment = args
            .image
            .map(|p| (AttachmentKind::Image, p))
            .or_else(|| args.file.map(|p| (AttachmentKind::File, p)));
        return if repl::run_once(&client, message, attachment, max_file_bytes).await {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    repl::run_interactive(&client, max_file_bytes).await;
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
