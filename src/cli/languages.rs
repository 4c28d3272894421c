//! Languages command implementation.

use serde::Serialize;

use comment_remover::config::Settings;
use comment_remover::error::Result;
use comment_remover::syntax::Language;

use super::output::{ResolvedFormat, output_list};

#[derive(Serialize)]
struct LanguageEntry {
    id: String,
    extensions: Vec<String>,
    single_line: Vec<String>,
    multi_line: Vec<String>,
    strings: Vec<String>,
}

impl From<&Language> for LanguageEntry {
    fn from(language: &Language) -> Self {
        let syntax = &language.syntax;
        Self {
            id: language.id.clone(),
            extensions: language.extensions.clone(),
            single_line: syntax
                .single_line_markers
                .iter()
                .map(|m| m.marker.trim_end().to_string())
                .collect(),
            multi_line: syntax
                .block_delimiters
                .iter()
                .map(|p| format!("{} ... {}", p.start, p.end))
                .collect(),
            strings: syntax
                .string_delimiters
                .iter()
                .chain(&syntax.raw_string_markers)
                .map(|d| d.delimiter.clone())
                .collect(),
        }
    }
}

pub fn list_languages(format: ResolvedFormat) -> Result<()> {
    let settings = Settings::load()?;
    let registry = settings.registry()?;
    let entries: Vec<LanguageEntry> = registry.iter().map(LanguageEntry::from).collect();

    output_list(&entries, format, |entries| {
        println!("Supported languages:");
        for entry in entries {
            print_entry(entry);
        }
    })
}

fn print_entry(entry: &LanguageEntry) {
    let or_none = |items: &[String]| {
        if items.is_empty() {
            "None".to_string()
        } else {
            items.join(", ")
        }
    };

    println!("  {}:", entry.id);
    let options = textwrap::Options::new(78)
        .initial_indent("    Extensions: ")
        .subsequent_indent("                ");
    println!("{}", textwrap::fill(&or_none(&entry.extensions), options));
    println!("    Single-line comment: {}", or_none(&entry.single_line));
    println!("    Multi-line comment: {}", or_none(&entry.multi_line));
    println!();
}
