//! Content-quality scoring.

use hab_core::IssueSet;
use hab_core::reports::QualityReport;

use crate::summary::RunCounts;

/// 0-100 health score: `100 − 100·(critical + inconsistencies + 0.5·warnings)
/// / items`, clamped at 0. Zero processed items is vacuously healthy.
#[must_use]
pub fn quality_score(critical: usize, inconsistencies: usize, warnings: usize, items: usize) -> f64 {
    if items == 0 {
        return 100.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let weighted = critical as f64 + inconsistencies as f64 + 0.5 * warnings as f64;
    #[allow(clippy::cast_precision_loss)]
    let score = 100.0 - 100.0 * weighted / items as f64;
    (score.max(0.0) * 10.0).round() / 10.0
}

/// Assemble the quality report artifact.
#[must_use]
pub fn build_quality_report(counts: &RunCounts, issues: &IssueSet) -> QualityReport {
    QualityReport {
        quality_score: quality_score(
            issues.critical_errors.len(),
            issues.inconsistencies.len(),
            issues.warnings.len(),
            counts.items(),
        ),
        habits_processed: counts.habits,
        research_processed: counts.research,
        critical_errors: issues.critical_errors.len(),
        data_inconsistencies: issues.inconsistencies.len(),
        content_warnings: issues.warnings.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_items_score_vacuously_healthy() {
        assert_eq!(quality_score(0, 0, 0, 0), 100.0);
        // Even with issues present, an empty content set scores 100.
        assert_eq!(quality_score(1, 0, 0, 0), 100.0);
    }

    #[test]
    fn one_habit_with_one_critical_error_scores_zero() {
        assert_eq!(quality_score(1, 0, 0, 1), 0.0);
    }

    #[test]
    fn score_clamps_at_zero() {
        assert_eq!(quality_score(5, 5, 5, 2), 0.0);
    }

    #[test]
    fn warnings_weigh_half() {
        // 100 - 100 * (0 + 0 + 0.5*1) / 10 = 95.
        assert_eq!(quality_score(0, 0, 1, 10), 95.0);
    }

    #[test]
    fn clean_content_scores_full() {
        assert_eq!(quality_score(0, 0, 0, 42), 100.0);
    }
}
