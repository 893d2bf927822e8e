//! # hab-report
//!
//! Report generation over the validator's issue lists: the validation
//! summary, the partitioned inconsistency report, the content-quality score,
//! the file manifest, and the human-readable Markdown narrative, plus the
//! artifact writer.
//!
//! Generation is read-only and idempotent: the same inputs always produce
//! byte-identical artifacts.

pub mod inconsistencies;
pub mod manifest;
pub mod markdown;
pub mod quality;
pub mod summary;
pub mod writer;

pub use inconsistencies::build_inconsistency_report;
pub use manifest::build_manifest;
pub use markdown::render_markdown;
pub use quality::build_quality_report;
pub use summary::{RunCounts, build_summary};
pub use writer::{ReportArtifacts, ReportError, write_all};

use hab_core::{ContentFileDescriptor, IssueSet};

/// Build every artifact for one run.
#[must_use]
pub fn generate(
    counts: &RunCounts,
    issues: &IssueSet,
    descriptors: &[ContentFileDescriptor],
) -> ReportArtifacts {
    let summary = build_summary(counts, issues);
    let quality = build_quality_report(counts, issues);
    let markdown = render_markdown(&summary, &quality, issues);
    ReportArtifacts {
        manifest: build_manifest(descriptors),
        inconsistencies: build_inconsistency_report(issues),
        summary,
        quality,
        markdown,
    }
}
