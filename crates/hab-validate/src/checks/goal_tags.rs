//! Goal-tag vocabulary checks.

use serde_json::json;

use hab_core::enums::{IssueType, Severity};
use hab_core::{DataInconsistency, IssueSet};

use crate::CheckContext;

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    for (id, habit) in &ctx.merged.habits {
        let tags = habit.string_array("goalTags").unwrap_or_default();
        if tags.is_empty() {
            issues.inconsistencies.push(DataInconsistency {
                issue_type: IssueType::MissingGoalTags,
                habit_id: Some(id.clone()),
                research_id: None,
                message: format!("habit '{id}' carries no goal tags"),
                details: None,
                severity: Severity::Medium,
                impact: "the habit cannot be recommended for any goal".to_string(),
                suggestions: vec!["Tag the habit with at least one goal".to_string()],
            });
            continue;
        }

        let invalid: Vec<&str> = tags
            .iter()
            .filter(|tag| !ctx.config.valid_goal_tags.contains(*tag))
            .map(String::as_str)
            .collect();
        if invalid.is_empty() {
            continue;
        }
        issues.inconsistencies.push(DataInconsistency {
            issue_type: IssueType::InvalidGoalTags,
            habit_id: Some(id.clone()),
            research_id: None,
            message: format!(
                "habit '{id}' uses goal tags outside the vocabulary: {}",
                invalid.join(", ")
            ),
            details: Some(json!({
                "invalid": invalid,
                "valid": ctx.config.valid_goal_tags,
            })),
            severity: Severity::Medium,
            impact: "the habit is invisible to goal-based filtering".to_string(),
            suggestions: vec!["Use tags from the configured vocabulary".to_string()],
        });
    }
}
