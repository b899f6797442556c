//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Action, Cli};
pub use output::{format_activity_list, format_update_preview};
