//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the
//! service layer.

pub mod commands;
pub mod menu;

pub use commands::{handle_command, AppContext, Commands};
pub use menu::Menu;
