//! Comment and string syntax descriptions.
//!
//! A [`SyntaxDescription`] is pure data: the scanner is a single generic state
//! machine and every language-specific rule lives in these fields. Descriptions
//! are kept in a [`SyntaxRegistry`] keyed by language identifier.

mod builtin;
mod registry;

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use registry::{Language, SyntaxRegistry};

/// A marker that opens a comment running to the end of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LineMarkerRepr")]
pub struct LineMarker {
    pub marker: String,
    /// Characters that, directly before the marker, keep it from opening a
    /// comment (`:` keeps `http://` intact).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_after: Vec<char>,
    /// Only opens a comment as a word of its own: at the start of the input,
    /// after whitespace or one of [`WORD_BREAKS`], and (for markers ending in
    /// a word character) not followed by another word character.
    #[serde(default)]
    pub standalone: bool,
}

/// Characters that end the previous word for [`LineMarker::standalone`].
pub const WORD_BREAKS: &[char] = &[';', '&', '|', '(', ')', '@'];

impl LineMarker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            not_after: Vec::new(),
            standalone: false,
        }
    }

    pub fn not_after(mut self, chars: &[char]) -> Self {
        self.not_after = chars.to_vec();
        self
    }

    pub fn standalone(mut self) -> Self {
        self.standalone = true;
        self
    }

    /// Whether this marker opens a comment at the start of `rest`, given the
    /// character directly before it.
    pub fn opens_at(&self, rest: &str, preceding: Option<char>) -> bool {
        if !rest.starts_with(self.marker.as_str()) {
            return false;
        }
        if preceding.is_some_and(|c| self.not_after.contains(&c)) {
            return false;
        }
        if !self.standalone {
            return true;
        }
        let starts_word =
            preceding.is_none_or(|c| c.is_whitespace() || WORD_BREAKS.contains(&c));
        let ends_word = !self.marker.ends_with(is_word_char)
            || !rest[self.marker.len()..].starts_with(is_word_char);
        starts_word && ends_word
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Config files may write a marker either as `"//"` or as a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum LineMarkerRepr {
    Plain(String),
    Full {
        marker: String,
        #[serde(default)]
        not_after: Vec<char>,
        #[serde(default)]
        standalone: bool,
    },
}

impl From<LineMarkerRepr> for LineMarker {
    fn from(repr: LineMarkerRepr) -> Self {
        match repr {
            LineMarkerRepr::Plain(marker) => Self::new(marker),
            LineMarkerRepr::Full {
                marker,
                not_after,
                standalone,
            } => Self {
                marker,
                not_after,
                standalone,
            },
        }
    }
}

/// A (start, end) pair bounding a block comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDelimiter {
    pub start: String,
    pub end: String,
    /// Inner start markers open a nested level that must be closed first.
    #[serde(default)]
    pub nestable: bool,
    /// Only opens when the current output line holds nothing but whitespace.
    /// Anchored pairs are tried before string delimiters.
    #[serde(default)]
    pub line_start: bool,
}

impl BlockDelimiter {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            nestable: false,
            line_start: false,
        }
    }

    pub fn nestable(mut self) -> Self {
        self.nestable = true;
        self
    }

    pub fn line_start(mut self) -> Self {
        self.line_start = true;
        self
    }
}

/// A delimiter that opens a string literal and closes it on exact re-match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StringDelimiterRepr")]
pub struct StringDelimiter {
    pub delimiter: String,
    /// When false, a line terminator ends the literal.
    #[serde(default = "default_multiline")]
    pub multiline: bool,
}

fn default_multiline() -> bool {
    true
}

impl StringDelimiter {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            multiline: true,
        }
    }

    pub fn single_line(mut self) -> Self {
        self.multiline = false;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringDelimiterRepr {
    Plain(String),
    Full {
        delimiter: String,
        #[serde(default = "default_multiline")]
        multiline: bool,
    },
}

impl From<StringDelimiterRepr> for StringDelimiter {
    fn from(repr: StringDelimiterRepr) -> Self {
        match repr {
            StringDelimiterRepr::Plain(delimiter) => Self::new(delimiter),
            StringDelimiterRepr::Full {
                delimiter,
                multiline,
            } => Self {
                delimiter,
                multiline,
            },
        }
    }
}

/// Lexical comment and string rules for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxDescription {
    pub single_line_markers: Vec<LineMarker>,
    pub block_delimiters: Vec<BlockDelimiter>,
    pub string_delimiters: Vec<StringDelimiter>,
    pub escape_char: Option<char>,
    /// String delimiters inside which the escape character has no effect.
    pub raw_string_markers: Vec<StringDelimiter>,
}

impl SyntaxDescription {
    /// A description with no markers at all. Scanning with it is the identity.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_line_markers(mut self, markers: impl IntoIterator<Item = LineMarker>) -> Self {
        self.single_line_markers.extend(markers);
        self
    }

    pub fn with_blocks(mut self, pairs: impl IntoIterator<Item = BlockDelimiter>) -> Self {
        self.block_delimiters.extend(pairs);
        self
    }

    pub fn with_strings(mut self, delimiters: impl IntoIterator<Item = StringDelimiter>) -> Self {
        self.string_delimiters.extend(delimiters);
        self
    }

    pub fn with_raw_strings(
        mut self,
        delimiters: impl IntoIterator<Item = StringDelimiter>,
    ) -> Self {
        self.raw_string_markers.extend(delimiters);
        self
    }

    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape_char = Some(escape);
        self
    }

    /// Sort every marker list longest-first so the scanner's first hit in a
    /// category is always the longest candidate.
    pub fn normalized(mut self) -> Self {
        self.single_line_markers
            .sort_by_key(|m| Reverse(m.marker.len()));
        self.block_delimiters.sort_by_key(|p| Reverse(p.start.len()));
        self.string_delimiters
            .sort_by_key(|d| Reverse(d.delimiter.len()));
        self.raw_string_markers
            .sort_by_key(|d| Reverse(d.delimiter.len()));
        self
    }

    /// Reject descriptions the scanner cannot resolve unambiguously.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] for empty markers, or for a token
    /// registered in two categories that are tried at the same position.
    /// Line-start block pairs may share their start with a string delimiter
    /// (Python docstrings).
    pub fn validate(&self, language: &str) -> Result<()> {
        let invalid = |reason: String| Error::InvalidSyntax {
            language: language.to_string(),
            reason,
        };

        let mut claimed: Vec<(&str, &'static str)> = Vec::new();
        for m in &self.single_line_markers {
            claimed.push((m.marker.as_str(), "single-line marker"));
        }
        for p in &self.block_delimiters {
            if p.end.is_empty() {
                return Err(invalid(format!("block '{}' has an empty end marker", p.start)));
            }
            if !p.line_start {
                claimed.push((p.start.as_str(), "block start"));
            } else if p.start.is_empty() {
                return Err(invalid("empty block start marker".to_string()));
            }
        }
        for d in self.string_delimiters.iter().chain(&self.raw_string_markers) {
            claimed.push((d.delimiter.as_str(), "string delimiter"));
        }

        for (i, (token, kind)) in claimed.iter().enumerate() {
            if token.is_empty() {
                return Err(invalid(format!("empty {kind}")));
            }
            if let Some((_, other)) = claimed[..i].iter().find(|(t, _)| t == token) {
                return Err(invalid(format!(
                    "'{token}' is registered as both {other} and {kind}"
                )));
            }
        }
        Ok(())
    }

    /// True when no marker of any kind is registered.
    pub fn is_plain(&self) -> bool {
        self.single_line_markers.is_empty()
            && self.block_delimiters.is_empty()
            && self.string_delimiters.is_empty()
            && self.raw_string_markers.is_empty()
    }
}
