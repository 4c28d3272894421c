//! Comment removal engine.
//!
//! One left-to-right pass over the input, driven entirely by a
//! [`SyntaxDescription`]. Every byte is classified as code, string content or
//! comment; comment bytes are dropped and everything else is copied through
//! unchanged. The pass never fails: malformed input (an unterminated string or
//! block comment) produces output plus an [`Advisory`].

mod advisory;

use log::{debug, trace};

use crate::syntax::{BlockDelimiter, StringDelimiter, SyntaxDescription};

pub use advisory::Advisory;

/// Result of a scan: the cleaned text and any tolerated malformations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub text: String,
    pub advisories: Vec<Advisory>,
}

impl ScanOutput {
    /// True when the input was well-formed for the syntax used.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }
}

/// Strip comments from `text`, discarding advisories.
pub fn remove_comments(text: &str, syntax: &SyntaxDescription) -> String {
    scan(text, syntax).text
}

/// Strip comments from `text` and report unterminated constructs.
pub fn scan(text: &str, syntax: &SyntaxDescription) -> ScanOutput {
    Scanner::new(text, syntax).run()
}

#[derive(Debug, Clone, Copy)]
enum ScanState<'s> {
    Code,
    InString {
        delimiter: &'s StringDelimiter,
        raw: bool,
        opened_at: usize,
    },
    InSingleLineComment,
    /// `depth` counts levels opened inside the outermost one.
    InBlockComment {
        pair: &'s BlockDelimiter,
        depth: usize,
        opened_at: usize,
    },
}

struct Scanner<'a> {
    text: &'a str,
    syntax: &'a SyntaxDescription,
    pos: usize,
    state: ScanState<'a>,
    out: String,
    /// Nothing but whitespace emitted since the last line break.
    line_blank: bool,
    /// Last offset resolved by `line_of` and its 1-based line number.
    line_mark: (usize, usize),
    advisories: Vec<Advisory>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, syntax: &'a SyntaxDescription) -> Self {
        Self {
            text,
            syntax,
            pos: 0,
            state: ScanState::Code,
            out: String::with_capacity(text.len()),
            line_blank: true,
            line_mark: (0, 1),
            advisories: Vec::new(),
        }
    }

    fn run(mut self) -> ScanOutput {
        while self.pos < self.text.len() {
            match self.state {
                ScanState::Code => self.step_code(),
                ScanState::InString {
                    delimiter,
                    raw,
                    opened_at,
                } => self.step_string(delimiter, raw, opened_at),
                ScanState::InSingleLineComment => self.step_line_comment(),
                ScanState::InBlockComment {
                    pair,
                    depth,
                    opened_at,
                } => self.step_block_comment(pair, depth, opened_at),
            }
        }
        self.finish()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn emit(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.line_blank = true;
            } else if !c.is_whitespace() {
                self.line_blank = false;
            }
        }
        self.out.push_str(s);
    }

    fn emit_char(&mut self) {
        let rest = self.rest();
        let len = rest.chars().next().map_or(1, char::len_utf8);
        self.emit(&rest[..len]);
        self.pos += len;
    }

    fn step_code(&mut self) {
        let rest = self.rest();
        let syntax = self.syntax;

        if self.line_blank
            && let Some(pair) = syntax
                .block_delimiters
                .iter()
                .find(|p| p.line_start && rest.starts_with(p.start.as_str()))
        {
            self.open_block(pair);
            return;
        }

        if let Some((delimiter, raw)) = self.match_string(rest) {
            trace!("string {} opened at {}", delimiter.delimiter, self.pos);
            self.emit(&delimiter.delimiter);
            self.state = ScanState::InString {
                delimiter,
                raw,
                opened_at: self.pos,
            };
            self.pos += delimiter.delimiter.len();
            return;
        }

        if let Some(pair) = syntax
            .block_delimiters
            .iter()
            .find(|p| !p.line_start && rest.starts_with(p.start.as_str()))
        {
            self.open_block(pair);
            return;
        }

        let preceding = self.text[..self.pos].chars().next_back();
        if let Some(marker) = syntax
            .single_line_markers
            .iter()
            .find(|m| m.opens_at(rest, preceding))
        {
            trace!("line comment {} at {}", marker.marker, self.pos);
            self.pos += marker.marker.len();
            self.state = ScanState::InSingleLineComment;
            return;
        }

        self.emit_char();
    }

    /// Longest delimiter across regular and raw strings; ties go to regular.
    fn match_string(&self, rest: &str) -> Option<(&'a StringDelimiter, bool)> {
        let syntax = self.syntax;
        syntax
            .string_delimiters
            .iter()
            .map(|d| (d, false))
            .chain(syntax.raw_string_markers.iter().map(|d| (d, true)))
            .filter(|(d, _)| rest.starts_with(d.delimiter.as_str()))
            .reduce(|best, candidate| {
                if candidate.0.delimiter.len() > best.0.delimiter.len() {
                    candidate
                } else {
                    best
                }
            })
    }

    fn open_block(&mut self, pair: &'a BlockDelimiter) {
        trace!("block {} opened at {}", pair.start, self.pos);
        self.state = ScanState::InBlockComment {
            pair,
            depth: 0,
            opened_at: self.pos,
        };
        self.pos += pair.start.len();
    }

    fn step_string(&mut self, delimiter: &'a StringDelimiter, raw: bool, opened_at: usize) {
        let rest = self.rest();

        if !raw
            && let Some(escape) = self.syntax.escape_char
            && rest.starts_with(escape)
        {
            let mut chars = rest.chars();
            chars.next();
            if let Some(next) = chars.next() {
                let len = escape.len_utf8() + next.len_utf8();
                self.emit(&rest[..len]);
                self.pos += len;
                return;
            }
        }

        if rest.starts_with(delimiter.delimiter.as_str()) {
            self.emit(&delimiter.delimiter);
            self.pos += delimiter.delimiter.len();
            self.state = ScanState::Code;
            return;
        }

        if !delimiter.multiline && starts_with_line_break(rest) {
            let line = self.line_of(opened_at);
            self.advisories.push(Advisory::UnterminatedString {
                delimiter: delimiter.delimiter.clone(),
                line,
            });
            self.state = ScanState::Code;
            return;
        }

        self.emit_char();
    }

    fn step_line_comment(&mut self) {
        let rest = self.rest();
        match rest.find('\n') {
            Some(idx) => {
                let end = if rest[..idx].ends_with('\r') { idx - 1 } else { idx };
                self.pos += end;
                self.state = ScanState::Code;
            }
            None => self.pos = self.text.len(),
        }
    }

    fn step_block_comment(&mut self, pair: &'a BlockDelimiter, depth: usize, opened_at: usize) {
        let rest = self.rest();

        if !pair.nestable {
            match rest.find(pair.end.as_str()) {
                Some(idx) => {
                    self.pos += idx + pair.end.len();
                    self.state = ScanState::Code;
                }
                None => self.pos = self.text.len(),
            }
            return;
        }

        if rest.starts_with(pair.end.as_str()) {
            self.pos += pair.end.len();
            self.state = match depth {
                0 => ScanState::Code,
                _ => ScanState::InBlockComment {
                    pair,
                    depth: depth - 1,
                    opened_at,
                },
            };
        } else if rest.starts_with(pair.start.as_str()) {
            self.pos += pair.start.len();
            self.state = ScanState::InBlockComment {
                pair,
                depth: depth + 1,
                opened_at,
            };
        } else {
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    /// Advisories are raised in input order, so counting resumes from the
    /// previous lookup instead of the start of the text.
    fn line_of(&mut self, offset: usize) -> usize {
        let (from, line) = match self.line_mark {
            (mark, line) if mark <= offset => (mark, line),
            _ => (0, 1),
        };
        let line = line
            + self.text.as_bytes()[from..offset]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
        self.line_mark = (offset, line);
        line
    }

    fn finish(mut self) -> ScanOutput {
        match self.state {
            ScanState::InString {
                delimiter,
                opened_at,
                ..
            } => {
                let line = self.line_of(opened_at);
                self.advisories.push(Advisory::UnterminatedString {
                    delimiter: delimiter.delimiter.clone(),
                    line,
                });
            }
            ScanState::InBlockComment {
                pair, opened_at, ..
            } => {
                let line = self.line_of(opened_at);
                self.advisories.push(Advisory::UnterminatedBlockComment {
                    start: pair.start.clone(),
                    line,
                });
            }
            ScanState::Code | ScanState::InSingleLineComment => {}
        }

        debug!(
            "scanned {} bytes, kept {}, {} advisories",
            self.text.len(),
            self.out.len(),
            self.advisories.len()
        );

        ScanOutput {
            text: self.out,
            advisories: self.advisories,
        }
    }
}

fn starts_with_line_break(s: &str) -> bool {
    s.starts_with('\n') || s.starts_with("\r\n")
}
