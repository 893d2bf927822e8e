//! Cross-kind id collisions. Same-kind repeats were already merged; an id
//! living in both the habit and research sets is unresolvable downstream.

use serde_json::json;

use hab_core::enums::IssueType;
use hab_core::{CriticalError, IssueSet};

use crate::CheckContext;

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    for (id, habit) in &ctx.merged.habits {
        let Some(research) = ctx.merged.research.get(id) else {
            continue;
        };
        issues.critical_errors.push(CriticalError::new(
            IssueType::DuplicateIds,
            format!("id '{id}' exists as both a habit and a research article"),
            Some(json!({
                "id": id,
                "habitSources": habit.sources,
                "researchSources": research.sources,
            })),
        ));
    }
}
