use std::fmt;

use serde::Serialize;

/// A malformation the scanner detected and tolerated.
///
/// Advisories never change the output; they tell the caller the result may not
/// be what the author intended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A string literal was still open at end of input (or, for single-line
    /// delimiters, at end of line). Its content was kept verbatim.
    UnterminatedString { delimiter: String, line: usize },
    /// A block comment was still open at end of input. The rest was dropped.
    UnterminatedBlockComment { start: String, line: usize },
}

impl Advisory {
    /// 1-based line of the construct's opening delimiter.
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line, .. } | Self::UnterminatedBlockComment { line, .. } => {
                *line
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { delimiter, line } => write!(
                f,
                "line {line}: unterminated string opened with {delimiter}; kept as-is"
            ),
            Self::UnterminatedBlockComment { start, line } => write!(
                f,
                "line {line}: unterminated block comment opened with {start}; rest of input removed"
            ),
        }
    }
}
