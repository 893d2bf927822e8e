//! # hab-validate
//!
//! Consistency validation over the merged content set: a fixed, ordered
//! battery of independent checks. Each check is a pure function over the
//! merged maps (plus the per-file batches, for the goal-file rules) that
//! appends to its own issue list; the lists are concatenated at the end, so
//! no check's failure can suppress another.

pub mod checks;
pub mod error;
pub mod schema;

pub use error::SchemaError;
pub use schema::SchemaRegistry;

use hab_config::ValidationConfig;
use hab_content::loader::LoadedFile;
use hab_content::merge::MergedContent;
use hab_core::IssueSet;

/// Read-only inputs shared by every check.
pub struct CheckContext<'a> {
    pub merged: &'a MergedContent,
    pub files: &'a [LoadedFile],
    pub config: &'a ValidationConfig,
    pub schemas: &'a SchemaRegistry,
}

type Check = fn(&CheckContext<'_>, &mut IssueSet);

/// The battery, in execution order. Order only affects issue-list ordering,
/// never which issues are found.
const CHECKS: &[(&str, Check)] = &[
    ("required_fields", checks::required_fields::run),
    ("field_values", checks::field_values::run),
    ("duplicate_ids", checks::duplicate_ids::run),
    ("references", checks::references::run),
    ("goal_tags", checks::goal_tags::run),
    ("quality", checks::quality::run),
    ("goal_files", checks::goal_files::run),
];

/// Run every check over the merged content set.
#[must_use]
pub fn run_checks(merged: &MergedContent, files: &[LoadedFile], config: &ValidationConfig) -> IssueSet {
    let schemas = SchemaRegistry::new();
    let ctx = CheckContext {
        merged,
        files,
        config,
        schemas: &schemas,
    };

    let mut issues = IssueSet::new();
    for (name, check) in CHECKS {
        tracing::debug!(check = name, "running validator check");
        let mut found = IssueSet::new();
        check(&ctx, &mut found);
        issues.extend(found);
    }
    issues
}
