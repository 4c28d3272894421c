//! Strip command implementation.

use colored::Colorize;
use log::{debug, info};

use comment_remover::config::Settings;
use comment_remover::detect::{Detection, detect};
use comment_remover::error::{Error, Result};
use comment_remover::files::{self, Destination};
use comment_remover::scanner;
use comment_remover::syntax::SyntaxRegistry;
use comment_remover::tidy::tidy;

use super::StripArgs;

pub fn run_strip(args: &StripArgs) -> Result<()> {
    if args.in_place && args.output.is_some() {
        return Err(Error::ConflictingOutputs);
    }

    let settings = Settings::load()?;
    let registry = settings.registry()?;
    let content = files::read_input(&args.input)?;

    let language = resolve_language(&registry, &settings, args, &content)?;
    let syntax = registry.lookup(&language)?;
    if syntax.is_plain() {
        info!("{language} has no comment syntax, output is unchanged");
    }

    let scanned = scanner::scan(&content, syntax);
    for advisory in &scanned.advisories {
        debug!("{}: {advisory:?}", args.input.display());
        eprintln!(
            "{} {}: {}",
            "warning:".yellow().bold(),
            args.input.display(),
            advisory
        );
    }

    let cleaned = tidy(&scanned.text, &settings.tidy.merge(args.tidy_options()));

    let destination = if args.in_place {
        Destination::InPlace {
            backup: settings.backup && !args.no_backup,
        }
    } else if let Some(path) = &args.output {
        Destination::File(path.clone())
    } else {
        Destination::Stdout
    };

    let backup = files::write_output(&args.input, &destination, &cleaned)?;
    match destination {
        Destination::Stdout => {}
        Destination::File(path) => println!("Processed file written to: {}", path.display()),
        Destination::InPlace { .. } => {
            if let Some(backup) = backup {
                println!("Original file backed up to: {}", backup.display());
            }
            println!("Comments removed in-place: {}", args.input.display());
        }
    }
    Ok(())
}

/// Pick the language id: forced `--type`, then detection, then the
/// configured fallback. A forced or fallback id must be registered.
fn resolve_language(
    registry: &SyntaxRegistry,
    settings: &Settings,
    args: &StripArgs,
    content: &str,
) -> Result<String> {
    if let Some(forced) = &args.language {
        let language = registry.language(forced)?;
        info!("using forced language: {}", language.id);
        return Ok(language.id.clone());
    }

    let detection = if files::is_stdin(&args.input) {
        Detection::Unknown
    } else {
        detect(registry, &args.input, Some(content))
    };

    match detection.language() {
        Some(id) => {
            info!("detected language: {detection}");
            Ok(id.to_string())
        }
        None => {
            let fallback = registry.language(&settings.fallback_language)?;
            info!(
                "could not detect language of {}, using {}",
                args.input.display(),
                fallback.id
            );
            Ok(fallback.id.clone())
        }
    }
}
