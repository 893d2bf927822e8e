//! Validation issue types and the run-scoped issue collection.
//!
//! Issues are structured data, not log lines: every stage appends to an
//! [`IssueSet`] instead of raising, and hosts decide how to render them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::{IssueType, Severity};

/// A structural error that blocks downstream use of the content set when the
/// pipeline runs in strict mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalError {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub severity: Severity,
}

impl CriticalError {
    #[must_use]
    pub fn new(issue_type: IssueType, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            issue_type,
            message: message.into(),
            details,
            severity: Severity::Critical,
        }
    }
}

/// A cross-referential or value-level defect that degrades functionality but
/// does not block the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataInconsistency {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_id: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub severity: Severity,
    pub impact: String,
    pub suggestions: Vec<String>,
}

/// An advisory content-authoring quality note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentWarning {
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub severity: Severity,
}

impl ContentWarning {
    #[must_use]
    pub fn new(category: impl Into<String>, message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
            details,
            severity: Severity::Low,
        }
    }
}

/// The three run-scoped issue lists. Stages create their own sets and the
/// pipeline concatenates them; issues are never mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSet {
    pub critical_errors: Vec<CriticalError>,
    pub inconsistencies: Vec<DataInconsistency>,
    pub warnings: Vec<ContentWarning>,
}

impl IssueSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, other: Self) {
        self.critical_errors.extend(other.critical_errors);
        self.inconsistencies.extend(other.inconsistencies);
        self.warnings.extend(other.warnings);
    }

    #[must_use]
    pub fn has_critical(&self) -> bool {
        !self.critical_errors.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.critical_errors.is_empty() && self.inconsistencies.is_empty() && self.warnings.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.critical_errors.len() + self.inconsistencies.len() + self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn critical_error_serializes_type_and_severity() {
        let error = CriticalError::new(
            IssueType::DuplicateIds,
            "id collides across kinds",
            Some(json!({"id": "h1"})),
        );
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], json!("DUPLICATE_IDS"));
        assert_eq!(value["severity"], json!("critical"));
        assert_eq!(value["details"]["id"], json!("h1"));
    }

    #[test]
    fn extend_concatenates_all_three_lists() {
        let mut set = IssueSet::new();
        set.warnings.push(ContentWarning::new("parse", "bad file", None));

        let mut other = IssueSet::new();
        other
            .critical_errors
            .push(CriticalError::new(IssueType::DiscoveryFailure, "boom", None));

        set.extend(other);
        assert_eq!(set.total(), 2);
        assert!(set.has_critical());
        assert!(!set.is_empty());
    }

    #[test]
    fn optional_ids_are_omitted_from_the_wire() {
        let inconsistency = DataInconsistency {
            issue_type: IssueType::OrphanedResearch,
            habit_id: None,
            research_id: Some("r1".into()),
            message: "unreferenced".into(),
            details: None,
            severity: Severity::Medium,
            impact: "unused content ships to the app".into(),
            suggestions: vec!["link it from a habit".into()],
        };
        let value = serde_json::to_value(&inconsistency).unwrap();
        assert!(value.get("habitId").is_none());
        assert_eq!(value["researchId"], json!("r1"));
    }
}
