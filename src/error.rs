//! Error types for comment-remover.

use thiserror::Error;

/// Result type alias using comment-remover's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in comment-remover.
///
/// Scanning itself never fails; everything here comes from the registry,
/// configuration, or the file layer around the engine.
#[derive(Error, Debug)]
pub enum Error {
    /// No syntax description registered under this identifier.
    #[error("unknown language: {0}\nRun `comment-remover languages` to see supported languages")]
    UnknownLanguage(String),

    /// A syntax description failed validation.
    #[error("invalid syntax for {language}: {reason}")]
    InvalidSyntax { language: String, reason: String },

    /// Input file does not exist.
    #[error("input file not found: {0}")]
    InputNotFound(String),

    /// Both `--output` and `--in-place` were requested.
    #[error("cannot use --in-place (-i) and --output (-o) together")]
    ConflictingOutputs,

    /// In-place editing needs a real file, not stdin.
    #[error("--in-place requires an input file, not stdin")]
    InPlaceStdin,

    /// Unknown configuration setting.
    #[error(
        "unknown setting: {0}\nValid options: fallback_language, backup, tidy.squeeze_blank_lines, tidy.trim_trailing_whitespace, tidy.final_newline"
    )]
    UnknownSetting(String),

    /// Invalid configuration value.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Configuration directory could not be determined.
    #[error("config error: {0}")]
    Config(String),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
