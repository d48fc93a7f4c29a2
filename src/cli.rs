use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "chatbot-tui", about = "Terminal chat widget for a WebSocket chatbot")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Page URL the chat endpoint is derived from (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub page_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the chat TUI
    Run,
    /// Print the resolved chat endpoint and exit
    Endpoint,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
