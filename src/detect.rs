//! Language detection from file extension and `#!` lines.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::syntax::SyntaxRegistry;

/// How a language was chosen for a file, or that none was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", content = "language", rename_all = "lowercase")]
pub enum Detection {
    Extension(String),
    Shebang(String),
    Unknown,
}

impl Detection {
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Extension(id) | Self::Shebang(id) => Some(id),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extension(id) => write!(f, "{id} (by extension)"),
            Self::Shebang(id) => write!(f, "{id} (by #! line)"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detect the language of `path`, sniffing `content` when the extension is
/// not registered.
pub fn detect(registry: &SyntaxRegistry, path: &Path, content: Option<&str>) -> Detection {
    if let Some(ext) = path.extension().and_then(|e| e.to_str())
        && let Some(language) = registry.by_extension(ext)
    {
        return Detection::Extension(language.id.clone());
    }

    content
        .and_then(interpreter)
        .and_then(|name| registry.by_interpreter(&name))
        .map(|language| Detection::Shebang(language.id.clone()))
        .unwrap_or(Detection::Unknown)
}

/// Interpreter named by a `#!` first line, with `env` and its flags skipped
/// and trailing version digits dropped (`python3.12` → `python`).
fn interpreter(content: &str) -> Option<String> {
    let first = content.lines().next()?.strip_prefix("#!")?;
    let mut words = first.split_whitespace();
    let mut program = words.next()?.rsplit('/').next()?;
    if program == "env" {
        program = words.find(|w| !w.starts_with('-') && !w.contains('='))?;
    }
    let name = program.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    (!name.is_empty()).then(|| name.to_string())
}
