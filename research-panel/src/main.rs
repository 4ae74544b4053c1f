//! Research panel, hosted in a terminal.
//!
//! `research-panel process summarize "some text"` (or text on stdin) posts the
//! text to the research service and prints the result; `show-note` and
//! `save-note` work on the persisted research note.

use clap::{Parser, Subcommand};
use research_panel::config::{self, PanelConfig};
use research_panel::host::PanelUi;
use research_panel::storage::JsonFileStorage;
use research_panel::terminal::{FixedSelection, TerminalUi};
use research_panel::{Operation, PanelOutcome, ResearchClient, ResearchPanel};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "research-panel", version, about = "Research assistant panel")]
struct Cli {
    /// Research service endpoint (defaults to RESEARCH_API_URL or localhost:8080)
    #[arg(long)]
    endpoint: Option<String>,

    /// Local storage file (defaults to RESEARCH_PANEL_STORAGE)
    #[arg(long)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Send text for summarize, suggest or analyze
    Process {
        operation: Operation,
        /// Text to process; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the saved research note
    ShowNote,
    /// Replace the saved research note
    SaveNote { text: String },
}

fn read_stdin() -> Option<String> {
    let mut buf = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
        log::warn!("[PANEL] Failed to read stdin: {}", e);
        return None;
    }
    let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Some(trimmed.to_string())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let panel_config = match cli.endpoint {
        Some(endpoint) => PanelConfig { endpoint },
        None => PanelConfig::from_env(),
    };
    let storage_path = cli.storage.unwrap_or_else(config::storage_path);

    let selection = match &cli.command {
        Command::Process { text: Some(text), .. } => Some(text.clone()),
        Command::Process { text: None, .. } => read_stdin(),
        _ => None,
    };

    let storage = Arc::new(JsonFileStorage::new(storage_path));
    let client = Arc::new(ResearchClient::new(&panel_config));
    log::debug!(
        "[PANEL] endpoint={} storage={}",
        client.endpoint(),
        storage.path().display()
    );

    let ui = Arc::new(TerminalUi::new());
    let panel = ResearchPanel::new(
        ui.clone(),
        Arc::new(FixedSelection::new(selection)),
        storage,
        client,
    );

    panel.initialize().await;

    match cli.command {
        Command::Process { operation, .. } => {
            if let PanelOutcome::Failed(_) = panel.process_text(operation).await {
                std::process::exit(1);
            }
        }
        Command::ShowNote => {
            println!("{}", ui.notes_value());
        }
        Command::SaveNote { text } => {
            ui.set_notes_value(&text);
            if let Err(e) = panel.save_note().await {
                log::error!("[NOTES] Failed to save research note: {}", e);
                std::process::exit(1);
            }
        }
    }
}
