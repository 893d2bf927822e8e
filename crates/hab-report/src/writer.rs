//! Report artifact writing.

use std::path::{Path, PathBuf};

use thiserror::Error;

use hab_core::reports::{ContentManifest, InconsistencyReport, QualityReport, ValidationSummary};

pub const MANIFEST_FILE: &str = "content-manifest.json";
pub const SUMMARY_FILE: &str = "validation-summary.json";
pub const INCONSISTENCIES_FILE: &str = "data-inconsistencies.json";
pub const QUALITY_FILE: &str = "content-quality-report.json";
pub const MARKDOWN_FILE: &str = "validation-report.md";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Every artifact produced for one run.
#[derive(Debug)]
pub struct ReportArtifacts {
    pub manifest: ContentManifest,
    pub summary: ValidationSummary,
    pub inconsistencies: InconsistencyReport,
    pub quality: QualityReport,
    pub markdown: String,
}

/// Write all five artifacts into `dir`, creating it if needed. Returns the
/// written paths in a fixed order.
///
/// # Errors
///
/// Returns `ReportError` when the directory cannot be created, a file cannot
/// be written, or serialization fails.
pub fn write_all(dir: &Path, artifacts: &ReportArtifacts) -> Result<Vec<PathBuf>, ReportError> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(5);
    written.push(write_json(dir, MANIFEST_FILE, &artifacts.manifest)?);
    written.push(write_json(dir, SUMMARY_FILE, &artifacts.summary)?);
    written.push(write_json(dir, INCONSISTENCIES_FILE, &artifacts.inconsistencies)?);
    written.push(write_json(dir, QUALITY_FILE, &artifacts.quality)?);

    let markdown_path = dir.join(MARKDOWN_FILE);
    std::fs::write(&markdown_path, &artifacts.markdown).map_err(|source| ReportError::Io {
        path: markdown_path.clone(),
        source,
    })?;
    written.push(markdown_path);

    tracing::info!(dir = %dir.display(), files = written.len(), "reports written");
    Ok(written)
}

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> Result<PathBuf, ReportError> {
    let path = dir.join(name);
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    std::fs::write(&path, body).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
