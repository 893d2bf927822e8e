//! Content file discovery over configured roots and legacy paths.
//!
//! Walks the habits, research, and custom roots (in that fixed order) with
//! the `ignore` crate's walker, standard filters disabled, then appends the
//! configured legacy files. Output order is deterministic: files sort by
//! filename within a root, legacy files keep their configured order.
//!
//! A missing root yields zero descriptors. Any other filesystem error is
//! reported as a `DISCOVERY_FAILURE` critical error scoped to that root, and
//! discovery continues with the remaining roots.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use serde_json::json;

use hab_config::ContentConfig;
use hab_core::enums::{FileKind, IssueType};
use hab_core::{ContentFileDescriptor, CriticalError, IssueSet};

/// Everything discovery produces for one run.
#[derive(Debug, Default)]
pub struct DiscoveryOutcome {
    pub descriptors: Vec<ContentFileDescriptor>,
    pub issues: IssueSet,
}

/// Enumerate the content files that currently exist.
#[must_use]
pub fn discover(config: &ContentConfig) -> DiscoveryOutcome {
    let mut outcome = DiscoveryOutcome::default();

    let roots = [
        (FileKind::Habit, &config.habits_dir),
        (FileKind::Research, &config.research_dir),
        (FileKind::Custom, &config.custom_dir),
    ];
    for (kind, root) in roots {
        discover_root(kind, root, &config.index_file, &mut outcome);
    }

    for path in &config.legacy_files {
        discover_legacy(path, &mut outcome);
    }

    tracing::debug!(
        files = outcome.descriptors.len(),
        errors = outcome.issues.critical_errors.len(),
        "discovery finished"
    );
    outcome
}

fn discover_root(kind: FileKind, root: &Path, index_file: &str, outcome: &mut DiscoveryOutcome) {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "content root missing, skipping");
        return;
    }

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);

    let mut candidates: Vec<(PathBuf, String)> = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.into_path();
                let Some(filename) = path.file_name().and_then(|n| n.to_str()).map(String::from)
                else {
                    continue;
                };
                if !filename.ends_with(".json") || filename == index_file {
                    continue;
                }
                candidates.push((path, filename));
            }
            Err(error) => {
                outcome.issues.critical_errors.push(discovery_failure(root, &error.to_string()));
            }
        }
    }

    candidates.sort_by(|a, b| a.1.cmp(&b.1));

    for (path, filename) in candidates {
        if let Some(expected) = naming_violation(kind, &filename) {
            outcome.issues.critical_errors.push(CriticalError::new(
                IssueType::NamingConvention,
                format!("file '{filename}' does not follow the {expected} naming convention"),
                Some(json!({"file": filename, "expected": expected})),
            ));
        }
        match describe(kind, path, filename, derive_category) {
            Ok(descriptor) => outcome.descriptors.push(descriptor),
            Err(message) => outcome.issues.critical_errors.push(discovery_failure(root, &message)),
        }
    }
}

fn discover_legacy(path: &Path, outcome: &mut DiscoveryOutcome) {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "legacy file missing, skipping");
        return;
    }
    let Some(filename) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
        return;
    };
    match describe(FileKind::Custom, path.to_path_buf(), filename, |_| String::from("legacy")) {
        Ok(descriptor) => outcome.descriptors.push(descriptor),
        Err(message) => outcome.issues.critical_errors.push(discovery_failure(path, &message)),
    }
}

fn describe(
    kind: FileKind,
    path: PathBuf,
    filename: String,
    categorize: impl Fn(&str) -> String,
) -> Result<ContentFileDescriptor, String> {
    let metadata = std::fs::metadata(&path)
        .map_err(|e| format!("failed to stat '{}': {e}", path.display()))?;
    let modified_at: DateTime<Utc> = metadata
        .modified()
        .map_err(|e| format!("failed to read mtime of '{}': {e}", path.display()))?
        .into();
    let category = categorize(&filename);
    Ok(ContentFileDescriptor {
        path,
        filename,
        category,
        kind,
        modified_at,
        size_bytes: metadata.len(),
    })
}

fn discovery_failure(scope: &Path, message: &str) -> CriticalError {
    CriticalError::new(
        IssueType::DiscoveryFailure,
        format!("discovery failed under '{}': {message}", scope.display()),
        Some(json!({"root": scope.display().to_string()})),
    )
}

/// Topical category from a filename: everything before a trailing
/// `-habits`/`-research` suffix, or `general` when neither suffix is present.
#[must_use]
pub fn derive_category(filename: &str) -> String {
    let stem = filename.strip_suffix(".json").unwrap_or(filename);
    for suffix in ["-habits", "-research"] {
        if let Some(prefix) = stem.strip_suffix(suffix) {
            if !prefix.is_empty() {
                return prefix.to_string();
            }
        }
    }
    String::from("general")
}

/// Expected naming pattern for governed roots, or `None` when the file
/// conforms (custom files are not governed).
fn naming_violation(kind: FileKind, filename: &str) -> Option<&'static str> {
    let stem = filename.strip_suffix(".json").unwrap_or(filename);
    match kind {
        FileKind::Habit if !stem.ends_with("-habits") => Some("<category>-habits.json"),
        FileKind::Research if !stem.ends_with("-research") => Some("<category>-research.json"),
        _ => None,
    }
}
