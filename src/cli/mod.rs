//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod history;
pub mod item;

pub use history::handle_history_command;
pub use item::{handle_item_command, ItemCommands};
