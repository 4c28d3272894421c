//! Optional cosmetic clean-up applied after comment removal.

use serde::{Deserialize, Serialize};

/// Which clean-ups to apply. All off leaves the text untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TidyOptions {
    /// Collapse runs of blank (whitespace-only) lines into one empty line.
    pub squeeze_blank_lines: bool,
    /// Strip spaces and tabs at the end of every line.
    pub trim_trailing_whitespace: bool,
    /// End non-empty output with exactly one `\n`.
    pub final_newline: bool,
}

impl TidyOptions {
    pub fn is_noop(&self) -> bool {
        !(self.squeeze_blank_lines || self.trim_trailing_whitespace || self.final_newline)
    }

    /// Turn on every option set in `other`.
    pub fn merge(self, other: TidyOptions) -> Self {
        Self {
            squeeze_blank_lines: self.squeeze_blank_lines || other.squeeze_blank_lines,
            trim_trailing_whitespace: self.trim_trailing_whitespace
                || other.trim_trailing_whitespace,
            final_newline: self.final_newline || other.final_newline,
        }
    }
}

pub fn tidy(text: &str, options: &TidyOptions) -> String {
    if options.is_noop() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut previous_blank = false;

    for line in text.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        let blank = body.trim().is_empty();

        if options.squeeze_blank_lines && blank {
            if previous_blank {
                continue;
            }
            previous_blank = true;
            result.push_str(terminator);
            continue;
        }
        previous_blank = blank;

        if options.trim_trailing_whitespace {
            result.push_str(body.trim_end_matches([' ', '\t']));
        } else {
            result.push_str(body);
        }
        result.push_str(terminator);
    }

    if options.final_newline {
        let trimmed_len = result.trim_end_matches(['\n', '\r']).len();
        if trimmed_len > 0 {
            result.truncate(trimmed_len);
            result.push('\n');
        }
    }

    result
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
