//! Configuration management for comment-remover.

mod settings;

pub use settings::{DEFAULT_FALLBACK, Settings};
