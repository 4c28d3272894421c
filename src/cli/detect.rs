//! Detect command implementation.

use std::path::Path;

use serde::Serialize;

use comment_remover::config::Settings;
use comment_remover::detect::{Detection, detect};
use comment_remover::error::Result;

use super::output::{ResolvedFormat, output};

#[derive(Serialize)]
struct DetectionReport {
    path: String,
    detection: Detection,
    /// Language `strip` would actually use.
    effective: String,
}

pub fn show_detection(path: &Path, format: ResolvedFormat) -> Result<()> {
    let settings = Settings::load()?;
    let registry = settings.registry()?;

    // Sniffing is best-effort: a missing or binary file just has no #! line.
    let content = std::fs::read_to_string(path).ok();
    let detection = detect(&registry, path, content.as_deref());
    let effective = detection
        .language()
        .unwrap_or(settings.fallback_language.as_str())
        .to_string();

    let report = DetectionReport {
        path: path.display().to_string(),
        detection,
        effective,
    };

    output(&report, format, |report| match report.detection {
        Detection::Unknown => println!(
            "{}: unknown (falls back to {})",
            report.path, report.effective
        ),
        ref detection => println!("{}: {detection}", report.path),
    })
}
