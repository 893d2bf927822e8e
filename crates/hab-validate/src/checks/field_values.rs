//! Field-value validation against the content schemas: bad enum values,
//! out-of-range numbers, and wrong types. Missing fields are the
//! required-fields check's concern.

use serde_json::json;

use hab_core::enums::{IssueType, Severity};
use hab_core::{ContentItem, DataInconsistency, IssueSet};

use crate::CheckContext;

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    for (id, item) in &ctx.merged.habits {
        validate_item(ctx, "habit", id, item, issues);
    }
    for (id, item) in &ctx.merged.research {
        validate_item(ctx, "research", id, item, issues);
    }
}

fn validate_item(
    ctx: &CheckContext<'_>,
    schema: &str,
    id: &str,
    item: &ContentItem,
    issues: &mut IssueSet,
) {
    let errors = match ctx.schemas.value_errors(schema, &item.as_json()) {
        Ok(errors) => errors,
        Err(error) => {
            tracing::warn!(schema, %error, "schema validation unavailable");
            return;
        }
    };
    if errors.is_empty() {
        return;
    }

    let (habit_id, research_id) = if schema == "habit" {
        (Some(id.to_string()), None)
    } else {
        (None, Some(id.to_string()))
    };
    issues.inconsistencies.push(DataInconsistency {
        issue_type: IssueType::InvalidFieldValues,
        habit_id,
        research_id,
        message: format!("{schema} '{id}' has {} field value violation(s)", errors.len()),
        details: Some(json!({"errors": errors})),
        severity: Severity::Medium,
        impact: "the item may render incorrectly or be excluded from recommendations".to_string(),
        suggestions: vec!["Correct the field values to match the content schema".to_string()],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{context_with, habit};
    use pretty_assertions::assert_eq;

    #[test]
    fn out_of_range_values_are_flagged_per_item() {
        let merged = context_with(
            vec![
                habit(json!({"id": "h1", "timeMinutes": 90, "priority": 5})),
                habit(json!({"id": "h2", "timeMinutes": 30})),
            ],
            vec![],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        let invalid: Vec<_> = issues
            .inconsistencies
            .iter()
            .filter(|i| i.issue_type == IssueType::InvalidFieldValues)
            .collect();
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].habit_id.as_deref(), Some("h1"));
    }

    #[test]
    fn invalid_enum_values_are_flagged() {
        let merged = context_with(
            vec![habit(json!({"id": "h1", "difficulty": "impossible"}))],
            vec![],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        assert!(
            issues
                .inconsistencies
                .iter()
                .any(|i| i.issue_type == IssueType::InvalidFieldValues)
        );
    }
}
