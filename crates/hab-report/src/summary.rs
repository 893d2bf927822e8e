//! Validation summary construction.

use std::collections::BTreeMap;

use hab_core::IssueSet;
use hab_core::enums::IssueType;
use hab_core::reports::{TopIssue, ValidationSummary};

/// Item and file counts from the merge stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunCounts {
    pub files: usize,
    pub habits: usize,
    pub research: usize,
}

impl RunCounts {
    #[must_use]
    pub const fn items(&self) -> usize {
        self.habits + self.research
    }
}

/// Aggregate one run's issues into the summary artifact.
#[must_use]
pub fn build_summary(counts: &RunCounts, issues: &IssueSet) -> ValidationSummary {
    let mut breakdown: BTreeMap<String, usize> = BTreeMap::new();
    for error in &issues.critical_errors {
        *breakdown.entry(error.issue_type.as_str().to_string()).or_default() += 1;
    }
    for inconsistency in &issues.inconsistencies {
        *breakdown
            .entry(inconsistency.issue_type.as_str().to_string())
            .or_default() += 1;
    }

    ValidationSummary {
        files_processed: counts.files,
        habits_processed: counts.habits,
        research_processed: counts.research,
        critical_errors: issues.critical_errors.len(),
        data_inconsistencies: issues.inconsistencies.len(),
        content_warnings: issues.warnings.len(),
        top_issues: top_issues(&breakdown),
        recommendations: recommendations(issues, &breakdown),
        issue_breakdown: breakdown,
    }
}

/// Top five issue types by frequency. BTreeMap iteration is already in
/// lexical type order, and the sort is stable, so ties keep that order.
fn top_issues(breakdown: &BTreeMap<String, usize>) -> Vec<TopIssue> {
    let mut ranked: Vec<TopIssue> = breakdown
        .iter()
        .map(|(issue_type, count)| TopIssue {
            issue_type: issue_type.clone(),
            count: *count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(5);
    ranked
}

fn recommendations(issues: &IssueSet, breakdown: &BTreeMap<String, usize>) -> Vec<String> {
    let mut out = Vec::new();
    if issues.has_critical() {
        out.push(format!(
            "Resolve the {} critical error(s) before shipping the content set",
            issues.critical_errors.len()
        ));
    }
    if breakdown.contains_key(IssueType::MissingResearch.as_str()) {
        out.push("Create the missing research articles or remove the dangling references".to_string());
    }
    if breakdown.contains_key(IssueType::OrphanedResearch.as_str()) {
        out.push("Link or archive the orphaned research articles".to_string());
    }
    if breakdown.contains_key(IssueType::MissingGoalTags.as_str())
        || breakdown.contains_key(IssueType::InvalidGoalTags.as_str())
    {
        out.push("Review goal tagging across habits".to_string());
    }
    if !issues.warnings.is_empty() {
        out.push(format!(
            "Address the {} content-quality warning(s) when convenient",
            issues.warnings.len()
        ));
    }
    if out.is_empty() {
        out.push("Content set is healthy; no action needed".to_string());
    }
    out
}
