//! CLI subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use comment_remover::tidy::TidyOptions;

use super::output::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove comments from a file.
    Strip(StripArgs),

    /// List supported languages and their comment syntax.
    Languages {
        /// Output format.
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Auto)]
        format: OutputFormat,
    },

    /// Show which language a file is detected as.
    Detect {
        /// File to inspect.
        path: PathBuf,
        /// Output format.
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Auto)]
        format: OutputFormat,
    },

    /// Manage comment-remover settings.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Input file, or `-` to read stdin.
    pub input: PathBuf,

    /// Write the result to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Modify the input file directly (a backup is kept unless --no-backup).
    #[arg(long, short)]
    pub in_place: bool,

    /// Force a language (e.g. python, c_style, css). Auto-detected by default.
    #[arg(long = "type", short = 't', value_name = "LANG")]
    pub language: Option<String>,

    /// Collapse runs of blank lines into one.
    #[arg(long)]
    pub squeeze_blank: bool,

    /// Strip trailing whitespace left on each line.
    #[arg(long)]
    pub trim_trailing: bool,

    /// End the output with exactly one newline.
    #[arg(long)]
    pub final_newline: bool,

    /// Skip the backup for --in-place edits.
    #[arg(long)]
    pub no_backup: bool,
}

impl StripArgs {
    pub fn tidy_options(&self) -> TidyOptions {
        TidyOptions {
            squeeze_blank_lines: self.squeeze_blank,
            trim_trailing_whitespace: self.trim_trailing,
            final_newline: self.final_newline,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the configuration file path.
    Path,

    /// Set a configuration value.
    Set {
        /// Setting name (e.g., fallback_language, tidy.squeeze_blank_lines).
        key: String,
        /// Value to set (true/false for booleans).
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Setting name.
        key: String,
    },
}
