//! CLI module for comment-remover.

mod commands;
pub mod config_cmd;
pub mod detect;
pub mod languages;
pub mod output;
pub mod strip;

pub use commands::{Commands, ConfigCommands, StripArgs};
