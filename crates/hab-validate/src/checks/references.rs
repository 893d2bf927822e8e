//! Habit-to-research reference integrity: dangling references and orphaned
//! research articles.

use std::collections::BTreeSet;

use serde_json::json;

use hab_core::enums::{IssueType, Severity};
use hab_core::{DataInconsistency, IssueSet};

use crate::CheckContext;

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    let mut referenced: BTreeSet<String> = BTreeSet::new();

    for (id, habit) in &ctx.merged.habits {
        let Some(refs) = habit.string_array("researchIds") else {
            continue;
        };
        referenced.extend(refs.iter().cloned());

        let missing: Vec<&str> = refs
            .iter()
            .filter(|r| !ctx.merged.research.contains_key(*r))
            .map(String::as_str)
            .collect();
        if missing.is_empty() {
            continue;
        }
        issues.inconsistencies.push(DataInconsistency {
            issue_type: IssueType::MissingResearch,
            habit_id: Some(id.clone()),
            research_id: None,
            message: format!(
                "habit '{id}' references research that does not exist: {}",
                missing.join(", ")
            ),
            details: Some(json!({"missingIds": missing})),
            severity: Severity::High,
            impact: "research backing will not display for this habit".to_string(),
            suggestions: vec![
                "Add the missing research articles".to_string(),
                "Or remove the dangling references from the habit".to_string(),
            ],
        });
    }

    for id in ctx.merged.research.keys() {
        if referenced.contains(id) {
            continue;
        }
        issues.inconsistencies.push(DataInconsistency {
            issue_type: IssueType::OrphanedResearch,
            habit_id: None,
            research_id: Some(id.clone()),
            message: format!("research '{id}' is referenced by no habit"),
            details: None,
            severity: Severity::Low,
            impact: "the article ships with the app but is never surfaced".to_string(),
            suggestions: vec![
                "Link the article from a habit's researchIds".to_string(),
                "Or archive the article".to_string(),
            ],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{context_with, habit, research};
    use pretty_assertions::assert_eq;

    #[test]
    fn dangling_reference_yields_exactly_one_inconsistency() {
        let merged = context_with(vec![habit(json!({"id": "h1", "researchIds": ["r9"]}))], vec![]);
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        let missing: Vec<_> = issues
            .inconsistencies
            .iter()
            .filter(|i| i.issue_type == IssueType::MissingResearch)
            .collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].habit_id.as_deref(), Some("h1"));
        assert!(missing[0].message.contains("r9"));
    }

    #[test]
    fn unreferenced_research_yields_exactly_one_orphan() {
        let merged = context_with(
            vec![habit(json!({"id": "h1", "researchIds": ["r1"]}))],
            vec![
                research(json!({"id": "r1"})),
                research(json!({"id": "r2"})),
            ],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        let orphans: Vec<_> = issues
            .inconsistencies
            .iter()
            .filter(|i| i.issue_type == IssueType::OrphanedResearch)
            .collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].research_id.as_deref(), Some("r2"));
    }

    #[test]
    fn fully_linked_content_is_clean() {
        let merged = context_with(
            vec![habit(json!({"id": "h1", "researchIds": ["r1"]}))],
            vec![research(json!({"id": "r1"}))],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());

        assert!(issues.inconsistencies.iter().all(|i| {
            i.issue_type != IssueType::MissingResearch && i.issue_type != IssueType::OrphanedResearch
        }));
    }
}
