//! Debug console: a text command surface over the privileged store overrides.
//!
//! The console only reaches the absolute setters and reset on [`GameStore`]; purchases
//! always go through their normal precondition checks elsewhere.

mod command;

pub use command::{ConsoleCommand, ConsoleError};

use tracing::debug;

use crate::core::GameStore;
use crate::save::{export_to_base64, save_data_from_state};

const WELCOME_LINES: [&str; 2] = [
    "Type 'help' for available commands",
    "Type 'clear' to clear console output",
];

const HELP_LINES: [&str; 8] = [
    "Available commands:",
    "  setdiamonds [NUMBER] - Set diamonds to specified value",
    "  setemeralds [NUMBER] - Set emeralds to specified value",
    "  setcpemerald [NUMBER] - Set clicks required per emerald",
    "  resetgame - Reset ALL game progress to default values",
    "  export - Print the current save as a base64 string",
    "  clear - Clear console output",
    "  help - Show this help message",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Console {
    history: Vec<String>,
}

impl Default for Console {
    fn default() -> Self {
        Self {
            history: WELCOME_LINES.iter().map(|line| line.to_string()).collect(),
        }
    }
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Echoes `input`, runs it against `store` and appends the response lines.
    /// Blank input is ignored.
    pub fn submit(&mut self, input: &str, store: &GameStore) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        match ConsoleCommand::parse(input) {
            Ok(ConsoleCommand::Clear) => self.history.clear(),
            Ok(command) => {
                self.history.push(format!("> {input}"));
                let lines = execute(command, store);
                self.history.extend(lines);
            }
            Err(err) => {
                self.history.push(format!("> {input}"));
                self.history.push(err.to_string());
            }
        }
    }
}

/// Applies `command` and returns the lines to print.
pub fn execute(command: ConsoleCommand, store: &GameStore) -> Vec<String> {
    debug!(?command, "console command");
    match command {
        ConsoleCommand::SetDiamonds(amount) => {
            store.set_primary_resource(amount as f64);
            vec![format!("Set diamonds to {amount}")]
        }
        ConsoleCommand::SetEmeralds(amount) => {
            store.set_secondary_resource(amount as f64);
            vec![format!("Set emeralds to {amount}")]
        }
        ConsoleCommand::SetClicksPerEmerald(clicks) => {
            store.set_clicks_per_milestone(clicks);
            vec![format!("Set clicks per emerald to {clicks}")]
        }
        ConsoleCommand::ResetGame => {
            store.reset();
            vec!["Game progress has been reset to default values!".to_string()]
        }
        ConsoleCommand::Export => {
            match export_to_base64(&save_data_from_state(&store.snapshot())) {
                Ok(encoded) => vec![encoded],
                Err(err) => vec![format!("Export failed: {err}")],
            }
        }
        ConsoleCommand::Help => HELP_LINES.iter().map(|line| line.to_string()).collect(),
        ConsoleCommand::Clear => Vec::new(),
    }
}
