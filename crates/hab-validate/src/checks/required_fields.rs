//! Required habit fields, with a severity split: load-critical fields are
//! critical errors, everything else downgrades to a schema warning.

use serde_json::json;

use hab_core::enums::IssueType;
use hab_core::{ContentWarning, CriticalError, IssueSet};

use crate::CheckContext;

/// The full canonical habit field set.
pub const REQUIRED_HABIT_FIELDS: &[&str] = &[
    "id",
    "title",
    "description",
    "category",
    "difficulty",
    "timeMinutes",
    "language",
    "researchBacked",
    "effectivenessScore",
    "effectivenessRank",
    "priority",
    "isPrimaryRecommendation",
    "goalTags",
    "instructions",
    "whyEffective",
    "researchSummary",
    "sources",
    "optimalTiming",
    "progressionTips",
];

/// Fields the application cannot render or route without.
pub const LOAD_CRITICAL_FIELDS: &[&str] = &["id", "title", "category"];

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    for (id, habit) in &ctx.merged.habits {
        // `id` is structurally guaranteed by the loader.
        let missing: Vec<&str> = REQUIRED_HABIT_FIELDS
            .iter()
            .copied()
            .filter(|field| *field != "id" && !habit.has_field(field))
            .collect();
        if missing.is_empty() {
            continue;
        }

        let (critical, advisory): (Vec<&str>, Vec<&str>) = missing
            .into_iter()
            .partition(|field| LOAD_CRITICAL_FIELDS.contains(field));

        if !critical.is_empty() {
            issues.critical_errors.push(CriticalError::new(
                IssueType::MissingRequiredFields,
                format!("habit '{id}' is missing load-critical fields: {}", critical.join(", ")),
                Some(json!({"habitId": id, "missing": critical})),
            ));
        }
        if !advisory.is_empty() {
            issues.warnings.push(ContentWarning::new(
                "schema",
                format!("habit '{id}' is missing fields: {}", advisory.join(", ")),
                Some(json!({"habitId": id, "missing": advisory})),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{context_with, habit};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_load_critical_fields_are_critical() {
        let merged = context_with(vec![habit(json!({"id": "h1", "description": "d"}))], vec![]);
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        let errors: Vec<_> = issues
            .critical_errors
            .iter()
            .filter(|e| e.issue_type == IssueType::MissingRequiredFields)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("title"));
        assert!(errors[0].message.contains("category"));
    }

    #[test]
    fn other_missing_fields_downgrade_to_warnings() {
        let merged = context_with(
            vec![habit(json!({"id": "h1", "title": "T", "category": "feel_better"}))],
            vec![],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        assert!(
            issues
                .critical_errors
                .iter()
                .all(|e| e.issue_type != IssueType::MissingRequiredFields)
        );
        let schema_warnings: Vec<_> =
            issues.warnings.iter().filter(|w| w.category == "schema").collect();
        assert_eq!(schema_warnings.len(), 1);
        assert!(schema_warnings[0].message.contains("difficulty"));
    }
}
