//! Language table: identifier → syntax description.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{SyntaxDescription, builtin};
use crate::error::{Error, Result};

static BUILTIN: Lazy<SyntaxRegistry> = Lazy::new(|| SyntaxRegistry {
    languages: builtin::languages()
        .into_iter()
        .map(Language::normalized)
        .collect(),
});

/// A registered language: how to recognise its files and how to scan them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    /// File extensions including the leading dot, lower-case.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Interpreter names matched against a `#!` line (`python`, `bash`).
    #[serde(default)]
    pub interpreters: Vec<String>,
    #[serde(flatten)]
    pub syntax: SyntaxDescription,
}

impl Language {
    pub fn new(id: impl Into<String>, syntax: SyntaxDescription) -> Self {
        Self {
            id: id.into(),
            extensions: Vec::new(),
            interpreters: Vec::new(),
            syntax,
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn with_interpreters(mut self, interpreters: &[&str]) -> Self {
        self.interpreters = interpreters.iter().map(|i| i.to_string()).collect();
        self
    }

    fn normalized(mut self) -> Self {
        self.extensions = self
            .extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        self.syntax = self.syntax.normalized();
        self
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Immutable-after-construction mapping from language id to syntax.
///
/// Iteration follows registration order, so listings stay stable.
#[derive(Debug, Clone, Default)]
pub struct SyntaxRegistry {
    languages: Vec<Language>,
}

impl SyntaxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table, constructed once per process.
    pub fn builtin() -> &'static SyntaxRegistry {
        Lazy::force(&BUILTIN)
    }

    /// Register a language, replacing any entry with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] if the syntax description is ambiguous.
    pub fn insert(&mut self, language: Language) -> Result<()> {
        language.syntax.validate(&language.id)?;
        let language = language.normalized();
        match self.languages.iter_mut().find(|l| l.id == language.id) {
            Some(existing) => *existing = language,
            None => self.languages.push(language),
        }
        Ok(())
    }

    /// Look up the syntax description for a language id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] if nothing is registered under `id`.
    pub fn lookup(&self, id: &str) -> Result<&SyntaxDescription> {
        self.language(id).map(|l| &l.syntax)
    }

    pub fn language(&self, id: &str) -> Result<&Language> {
        self.languages
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| Error::UnknownLanguage(id.to_string()))
    }

    /// Find the language owning a file extension (with or without the dot).
    /// Later registrations win over earlier ones.
    pub fn by_extension(&self, ext: &str) -> Option<&Language> {
        let ext = normalize_extension(ext);
        self.languages
            .iter()
            .rev()
            .find(|l| l.extensions.contains(&ext))
    }

    pub fn by_interpreter(&self, name: &str) -> Option<&Language> {
        self.languages
            .iter()
            .rev()
            .find(|l| l.interpreters.iter().any(|i| i == name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
