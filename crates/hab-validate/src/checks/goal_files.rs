//! Business rules for goal-scoped files: unique priorities, category
//! agreement with the file's declared goal, and a primary recommendation.
//!
//! These rules are per-file, so they run over the loader's batches rather
//! than the merged maps.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use hab_core::enums::{FileKind, GoalCategory, IssueType, Severity};
use hab_core::item::extract_id;
use hab_core::{ContentWarning, DataInconsistency, IssueSet};

use crate::CheckContext;

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    for file in ctx.files {
        if file.descriptor.kind != FileKind::Habit {
            continue;
        }
        let Some(goal) = GoalCategory::from_file_category(&file.descriptor.category) else {
            continue;
        };
        check_goal_file(&file.descriptor.filename, goal, &file.habits, issues);
    }
}

fn check_goal_file(filename: &str, goal: GoalCategory, habits: &[Value], issues: &mut IssueSet) {
    let mut by_priority: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    let mut has_primary = false;

    for value in habits {
        let Some(object) = value.as_object() else { continue };
        let Some(id) = extract_id(object.get("id")) else { continue };

        if let Some(priority) = object.get("priority").and_then(Value::as_i64) {
            by_priority.entry(priority).or_default().push(id.clone());
        }
        if object.get("isPrimaryRecommendation").and_then(Value::as_bool) == Some(true) {
            has_primary = true;
        }
        if let Some(category) = object.get("category").and_then(Value::as_str) {
            if category != goal.as_str() {
                issues.inconsistencies.push(DataInconsistency {
                    issue_type: IssueType::CategoryMismatch,
                    habit_id: Some(id),
                    research_id: None,
                    message: format!(
                        "habit in '{filename}' declares category '{category}' but the file is scoped to '{goal}'"
                    ),
                    details: Some(json!({"file": filename, "expected": goal.as_str(), "actual": category})),
                    severity: Severity::Medium,
                    impact: "the habit surfaces under the wrong goal".to_string(),
                    suggestions: vec![format!("Set the habit's category to '{goal}' or move it to the right file")],
                });
            }
        }
    }

    for (priority, ids) in &by_priority {
        if ids.len() < 2 {
            continue;
        }
        issues.inconsistencies.push(DataInconsistency {
            issue_type: IssueType::DuplicatePriorities,
            habit_id: None,
            research_id: None,
            message: format!(
                "priority {priority} is shared by {} habits in '{filename}': {}",
                ids.len(),
                ids.join(", ")
            ),
            details: Some(json!({"file": filename, "priority": priority, "habitIds": ids})),
            severity: Severity::High,
            impact: "recommendation ordering within the goal is ambiguous".to_string(),
            suggestions: vec!["Assign a unique priority to every habit in the file".to_string()],
        });
    }

    if !has_primary {
        issues.warnings.push(ContentWarning::new(
            "goal_file",
            format!("goal file '{filename}' declares no primary recommendation"),
            Some(json!({"file": filename, "goal": goal.as_str()})),
        ));
    }
}
