//! Built-in language table.

use super::{BlockDelimiter, Language, LineMarker, StringDelimiter, SyntaxDescription};

fn quotes(delimiters: &[&str]) -> Vec<StringDelimiter> {
    delimiters.iter().map(|d| StringDelimiter::new(*d)).collect()
}

fn markers(markers: &[&str]) -> Vec<LineMarker> {
    markers.iter().map(|m| LineMarker::new(*m)).collect()
}

pub(super) fn languages() -> Vec<Language> {
    vec![
        Language::new(
            "c_style",
            SyntaxDescription::plain()
                .with_line_markers([LineMarker::new("//").not_after(&[':'])])
                .with_blocks([BlockDelimiter::new("/*", "*/")])
                .with_strings(quotes(&["\"", "'", "`"]))
                .with_escape('\\'),
        )
        .with_extensions(&[
            ".c", ".cpp", ".h", ".hpp", ".java", ".js", ".jsx", ".ts", ".tsx", ".cs", ".php",
            ".swift", ".go", ".kt", ".scala",
        ])
        .with_interpreters(&["node", "deno", "php"]),
        Language::new(
            "shell",
            SyntaxDescription::plain()
                .with_line_markers([LineMarker::new("#").standalone()])
                .with_strings(quotes(&["\""]))
                .with_raw_strings(quotes(&["'"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".sh", ".bash", ".zsh", ".ksh"])
        .with_interpreters(&["sh", "bash", "zsh", "ksh", "dash"]),
        // Triple-quoted blocks standing as their own statement are docstrings
        // and go; the same delimiters after code are ordinary strings.
        Language::new(
            "python",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["#"]))
                .with_blocks([
                    BlockDelimiter::new("\"\"\"", "\"\"\"").line_start(),
                    BlockDelimiter::new("'''", "'''").line_start(),
                ])
                .with_strings(quotes(&["\"\"\"", "'''", "\"", "'"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".py", ".pyw"])
        .with_interpreters(&["python", "pypy"]),
        Language::new(
            "ruby",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["#"]))
                .with_blocks([BlockDelimiter::new("=begin", "=end").line_start()])
                .with_strings(quotes(&["\"", "'"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".rb", ".rake", ".gemspec"])
        .with_interpreters(&["ruby"]),
        // No string delimiters: apostrophes in text content are not literals.
        Language::new(
            "markup",
            SyntaxDescription::plain().with_blocks([BlockDelimiter::new("<!--", "-->")]),
        )
        .with_extensions(&[
            ".html", ".htm", ".xml", ".svg", ".xhtml", ".jsp", ".asp", ".aspx",
        ]),
        Language::new(
            "css",
            SyntaxDescription::plain()
                .with_line_markers([LineMarker::new("//").not_after(&[':'])])
                .with_blocks([BlockDelimiter::new("/*", "*/")])
                .with_strings(quotes(&["\"", "'"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".css", ".scss", ".sass", ".less"]),
        // Doubled quotes ('it''s') scan as two adjacent literals, so no escape.
        Language::new(
            "sql",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["--", "#"]))
                .with_blocks([BlockDelimiter::new("/*", "*/")])
                .with_strings(quotes(&["'", "\""])),
        )
        .with_extensions(&[".sql", ".sqlite", ".pgsql"]),
        Language::new(
            "lua",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["--"]))
                .with_blocks([BlockDelimiter::new("--[[", "]]")])
                .with_strings(quotes(&["\"", "'"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".lua"])
        .with_interpreters(&["lua", "luajit"]),
        Language::new(
            "powershell",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["#"]))
                .with_blocks([BlockDelimiter::new("<#", "#>")])
                .with_strings(quotes(&["\""]))
                .with_raw_strings(quotes(&["'"]))
                .with_escape('`'),
        )
        .with_extensions(&[".ps1", ".psm1", ".psd1"])
        .with_interpreters(&["pwsh", "powershell"]),
        Language::new(
            "yaml",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["#"]))
                .with_strings([StringDelimiter::new("\"").single_line()])
                .with_raw_strings([StringDelimiter::new("'").single_line()])
                .with_escape('\\'),
        )
        .with_extensions(&[".yaml", ".yml"]),
        Language::new(
            "perl",
            SyntaxDescription::plain()
                .with_line_markers([LineMarker::new("#").not_after(&['$'])])
                .with_blocks([BlockDelimiter::new("=pod", "=cut").line_start()])
                .with_strings(quotes(&["\"", "'", "`"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".pl", ".pm", ".t"])
        .with_interpreters(&["perl"]),
        Language::new(
            "r",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["#"]))
                .with_strings(quotes(&["\"", "'"]))
                .with_escape('\\'),
        )
        .with_extensions(&[".r"])
        .with_interpreters(&["Rscript"]),
        // `'` is left out: primes are identifier characters (x'). Strings
        // stop at a line break so a `'"'` char literal damages one line only.
        Language::new(
            "haskell",
            SyntaxDescription::plain()
                .with_line_markers(markers(&["--"]))
                .with_blocks([BlockDelimiter::new("{-", "-}").nestable()])
                .with_strings([StringDelimiter::new("\"").single_line()])
                .with_escape('\\'),
        )
        .with_extensions(&[".hs", ".lhs"])
        .with_interpreters(&["runghc", "runhaskell"]),
        Language::new(
            "batch",
            SyntaxDescription::plain()
                .with_line_markers([
                    LineMarker::new("REM").standalone(),
                    LineMarker::new("Rem").standalone(),
                    LineMarker::new("rem").standalone(),
                    LineMarker::new("::"),
                ])
                .with_strings([StringDelimiter::new("\"").single_line()]),
        )
        .with_extensions(&[".bat", ".cmd"]),
        Language::new("plain", SyntaxDescription::plain()).with_extensions(&[".txt"]),
    ]
}
