//! comment-remover's own configuration file handling.

use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::syntax::{Language, SyntaxRegistry};
use crate::tidy::TidyOptions;

/// Language used when detection fails and none is configured.
pub const DEFAULT_FALLBACK: &str = "c_style";

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

fn default_backup() -> bool {
    true
}

/// comment-remover's configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Language assumed when a file's language cannot be detected.
    #[serde(default = "default_fallback")]
    pub fallback_language: String,

    /// Whether in-place edits keep a timestamped backup of the original.
    #[serde(default = "default_backup")]
    pub backup: bool,

    /// Post-processing applied to every stripped file.
    #[serde(default)]
    pub tidy: TidyOptions,

    /// Extra languages, or overrides of built-in ones with the same id.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback(),
            backup: default_backup(),
            tidy: TidyOptions::default(),
            languages: Vec::new(),
        }
    }
}

impl Settings {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            debug!("loading settings from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the default configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Get the configuration directory path.
    ///
    /// Respects the `COMMENT_REMOVER_CONFIG_DIR` environment variable for testing,
    /// then `XDG_CONFIG_HOME`, then `~/.config`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("COMMENT_REMOVER_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        if let Ok(dir) = std::env::var("XDG_CONFIG_HOME")
            && !dir.is_empty()
        {
            return Ok(PathBuf::from(dir).join("comment-remover"));
        }
        home::home_dir()
            .map(|d| d.join(".config").join("comment-remover"))
            .ok_or_else(|| Error::Config("could not determine home directory".to_string()))
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// The built-in registry extended with this file's languages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] if a configured language is ambiguous.
    pub fn registry(&self) -> Result<SyntaxRegistry> {
        let mut registry = SyntaxRegistry::builtin().clone();
        for language in &self.languages {
            debug!("registering configured language {}", language.id);
            registry.insert(language.clone())?;
        }
        Ok(registry)
    }
}
