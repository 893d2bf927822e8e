//! Human-readable Markdown narrative report.

use std::fmt::Write as _;

use hab_core::IssueSet;
use hab_core::reports::{QualityReport, ValidationSummary};

/// Render the narrative report. Purely derived from its inputs, so repeated
/// rendering is byte-identical.
#[must_use]
pub fn render_markdown(summary: &ValidationSummary, quality: &QualityReport, issues: &IssueSet) -> String {
    let mut out = String::new();

    let status = if summary.critical_errors == 0 {
        "PASS"
    } else {
        "FAIL"
    };
    let _ = writeln!(out, "# Content Validation Report\n");
    let _ = writeln!(out, "**Status:** {status}");
    let _ = writeln!(out, "**Quality score:** {:.1} / 100\n", quality.quality_score);

    let _ = writeln!(out, "## Totals\n");
    let _ = writeln!(out, "| Metric | Count |");
    let _ = writeln!(out, "| --- | --- |");
    let _ = writeln!(out, "| Files processed | {} |", summary.files_processed);
    let _ = writeln!(out, "| Habits | {} |", summary.habits_processed);
    let _ = writeln!(out, "| Research articles | {} |", summary.research_processed);
    let _ = writeln!(out, "| Critical errors | {} |", summary.critical_errors);
    let _ = writeln!(out, "| Data inconsistencies | {} |", summary.data_inconsistencies);
    let _ = writeln!(out, "| Content warnings | {} |\n", summary.content_warnings);

    if !issues.critical_errors.is_empty() {
        let _ = writeln!(out, "## Critical errors\n");
        for error in &issues.critical_errors {
            let _ = writeln!(out, "- **{}**: {}", error.issue_type, error.message);
        }
        let _ = writeln!(out);
    }

    if !issues.inconsistencies.is_empty() {
        let _ = writeln!(out, "## Data inconsistencies\n");
        for inconsistency in &issues.inconsistencies {
            let _ = writeln!(out, "- **{}**: {}", inconsistency.issue_type, inconsistency.message);
            for suggestion in &inconsistency.suggestions {
                let _ = writeln!(out, "  - suggestion: {suggestion}");
            }
        }
        let _ = writeln!(out);
    }

    if !issues.warnings.is_empty() {
        let _ = writeln!(out, "## Warnings\n");
        for warning in &issues.warnings {
            let _ = writeln!(out, "- [{}] {}", warning.category, warning.message);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Recommendations\n");
    for recommendation in &summary.recommendations {
        let _ = writeln!(out, "- {recommendation}");
    }

    out
}
