//! Kind, severity, goal, and issue-type enums for Habitat.
//!
//! Content-facing enums (`GoalCategory`, `Difficulty`) serialize `snake_case`
//! to match the hand-authored JSON. Issue types serialize
//! `SCREAMING_SNAKE_CASE` because that is the wire form consumers of the
//! report artifacts match on.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FileKind
// ---------------------------------------------------------------------------

/// The kind of a discovered content file, derived from the root it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Habit,
    Research,
    Custom,
}

impl FileKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Habit => "habit",
            Self::Research => "research",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemKind
// ---------------------------------------------------------------------------

/// Top-level entity category of a normalized content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Habit,
    Research,
}

impl ItemKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Habit => "habit",
            Self::Research => "research",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity attached to every validation issue.
///
/// `Critical` blocks deployment in strict mode. `High` and `Medium` degrade
/// functionality but never block. `Low` is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueType
// ---------------------------------------------------------------------------

/// Typed classification of critical errors and data inconsistencies.
///
/// Content warnings carry a free-form category string instead; they have no
/// entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    // Critical
    DiscoveryFailure,
    MissingRequiredFields,
    DuplicateIds,
    NamingConvention,
    PipelineTimeout,
    // Inconsistencies
    MissingResearch,
    OrphanedResearch,
    InvalidGoalTags,
    MissingGoalTags,
    InvalidFieldValues,
    DuplicatePriorities,
    CategoryMismatch,
}

impl IssueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DiscoveryFailure => "DISCOVERY_FAILURE",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::DuplicateIds => "DUPLICATE_IDS",
            Self::NamingConvention => "NAMING_CONVENTION",
            Self::PipelineTimeout => "PIPELINE_TIMEOUT",
            Self::MissingResearch => "MISSING_RESEARCH",
            Self::OrphanedResearch => "ORPHANED_RESEARCH",
            Self::InvalidGoalTags => "INVALID_GOAL_TAGS",
            Self::MissingGoalTags => "MISSING_GOAL_TAGS",
            Self::InvalidFieldValues => "INVALID_FIELD_VALUES",
            Self::DuplicatePriorities => "DUPLICATE_PRIORITIES",
            Self::CategoryMismatch => "CATEGORY_MISMATCH",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GoalCategory
// ---------------------------------------------------------------------------

/// A habit's goal category. Also identifies goal-scoped content files whose
/// filename encodes one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    FeelBetter,
    GetMoving,
    BetterSleep,
}

impl GoalCategory {
    pub const ALL: [Self; 3] = [Self::FeelBetter, Self::GetMoving, Self::BetterSleep];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeelBetter => "feel_better",
            Self::GetMoving => "get_moving",
            Self::BetterSleep => "better_sleep",
        }
    }

    /// Match a filename-derived category (`feel-better`, `better-sleep`, ...)
    /// against the goal vocabulary. Filenames use hyphens where the content
    /// field uses underscores.
    #[must_use]
    pub fn from_file_category(category: &str) -> Option<Self> {
        let normalized = category.replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Habit difficulty. Two historical vocabularies are accepted side by side;
/// normalizing them is out of scope for the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn issue_type_serializes_screaming_snake() {
        let json = serde_json::to_string(&IssueType::MissingResearch).unwrap();
        assert_eq!(json, "\"MISSING_RESEARCH\"");
        assert_eq!(IssueType::MissingResearch.as_str(), "MISSING_RESEARCH");
    }

    #[test]
    fn goal_category_matches_hyphenated_file_categories() {
        assert_eq!(
            GoalCategory::from_file_category("better-sleep"),
            Some(GoalCategory::BetterSleep)
        );
        assert_eq!(
            GoalCategory::from_file_category("feel_better"),
            Some(GoalCategory::FeelBetter)
        );
        assert_eq!(GoalCategory::from_file_category("sleep"), None);
    }

    #[test]
    fn content_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&GoalCategory::FeelBetter).unwrap(),
            "\"feel_better\""
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Challenging).unwrap(),
            "\"challenging\""
        );
        assert_eq!(serde_json::to_string(&FileKind::Custom).unwrap(), "\"custom\"");
    }

    #[test]
    fn wire_forms_sort_lexically_for_tie_breaking() {
        let mut types = [IssueType::OrphanedResearch, IssueType::MissingResearch];
        types.sort_by_key(|t| t.as_str());
        assert_eq!(types[0], IssueType::MissingResearch);
    }
}
