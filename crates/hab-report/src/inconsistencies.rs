//! Inconsistency report partitioned by issue type.

use hab_core::IssueSet;
use hab_core::reports::InconsistencyReport;

/// Partition the run's inconsistencies by wire-form issue type. Entries keep
/// their per-issue remediation suggestions.
#[must_use]
pub fn build_inconsistency_report(issues: &IssueSet) -> InconsistencyReport {
    let mut report = InconsistencyReport {
        total: issues.inconsistencies.len(),
        ..InconsistencyReport::default()
    };
    for inconsistency in &issues.inconsistencies {
        report
            .by_type
            .entry(inconsistency.issue_type.as_str().to_string())
            .or_default()
            .push(inconsistency.clone());
    }
    report
}
