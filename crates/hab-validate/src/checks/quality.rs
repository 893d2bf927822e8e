//! Content-quality heuristics. Warnings only.

use serde_json::json;

use hab_core::{ContentWarning, IssueSet};

use crate::CheckContext;

pub fn run(ctx: &CheckContext<'_>, issues: &mut IssueSet) {
    for (id, habit) in &ctx.merged.habits {
        let instructions = habit.string_array("instructions").unwrap_or_default();
        if instructions.len() < ctx.config.min_instruction_steps {
            issues.warnings.push(ContentWarning::new(
                "quality",
                format!(
                    "habit '{id}' has {} instruction step(s); at least {} expected",
                    instructions.len(),
                    ctx.config.min_instruction_steps
                ),
                Some(json!({"habitId": id, "steps": instructions.len()})),
            ));
        }
        let terse = instructions
            .iter()
            .filter(|step| step.trim().len() < ctx.config.min_instruction_len)
            .count();
        if terse > 0 {
            issues.warnings.push(ContentWarning::new(
                "quality",
                format!("habit '{id}' has {terse} instruction step(s) under {} characters", ctx.config.min_instruction_len),
                Some(json!({"habitId": id, "terseSteps": terse})),
            ));
        }
    }

    for (id, research) in &ctx.merged.research {
        if let Some(summary) = research.str_field("summary") {
            if summary.trim().len() < ctx.config.min_summary_len {
                issues.warnings.push(ContentWarning::new(
                    "quality",
                    format!(
                        "research '{id}' has a summary under {} characters",
                        ctx.config.min_summary_len
                    ),
                    Some(json!({"researchId": id, "length": summary.trim().len()})),
                ));
            }
        }
        let year = research
            .i64_field("publishedYear")
            .or_else(|| research.i64_field("year"));
        if let Some(year) = year {
            if year < ctx.config.stale_before_year {
                issues.warnings.push(ContentWarning::new(
                    "quality",
                    format!(
                        "research '{id}' was published in {year}, before the {} staleness cutoff",
                        ctx.config.stale_before_year
                    ),
                    Some(json!({"researchId": id, "publishedYear": year})),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{context_with, habit, research};
    use pretty_assertions::assert_eq;

    fn quality_warnings(issues: &IssueSet) -> Vec<&ContentWarning> {
        issues.warnings.iter().filter(|w| w.category == "quality").collect()
    }

    #[test]
    fn short_instruction_lists_warn() {
        let merged = context_with(
            vec![habit(json!({"id": "h1", "instructions": ["Do the whole routine now"]}))],
            vec![],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());
        let warnings = quality_warnings(&issues);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("instruction step(s)"));
    }

    #[test]
    fn terse_steps_warn_once_per_habit() {
        let merged = context_with(
            vec![habit(json!({"id": "h1", "instructions": ["Go", "Sit", "Breathe deeply for ten minutes"]}))],
            vec![],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());
        let warnings = quality_warnings(&issues);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("2 instruction step(s) under"));
    }

    #[test]
    fn short_summaries_and_stale_research_warn() {
        let merged = context_with(
            vec![],
            vec![research(json!({
                "id": "r1",
                "summary": "too short",
                "publishedYear": 1998
            }))],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());
        let warnings = quality_warnings(&issues);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn healthy_content_emits_no_quality_warnings() {
        let merged = context_with(
            vec![habit(json!({
                "id": "h1",
                "instructions": [
                    "Lay out your mat the night before",
                    "Stretch for five minutes after waking",
                    "Note how you feel in one sentence"
                ]
            }))],
            vec![research(json!({
                "id": "r1",
                "summary": "A randomized trial covering 240 adults over twelve weeks showed measurable gains.",
                "publishedYear": 2021
            }))],
        );
        let issues = crate::run_checks(&merged, &[], &hab_config::ValidationConfig::default());
        assert_eq!(quality_warnings(&issues).len(), 0);
    }
}
