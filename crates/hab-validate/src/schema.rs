//! Content schema registry.
//!
//! JSON Schemas for the canonical habit and research shapes are built from
//! Rust types at construction time using [`schemars::schema_for!`] and
//! enforced with `jsonschema`. The registry reports *value* violations (bad
//! enums, out-of-range numbers, wrong types); missing required fields are the
//! required-fields check's concern and are filtered out here.

use std::collections::HashMap;

use jsonschema::error::ValidationErrorKind;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use hab_core::enums::{Difficulty, GoalCategory};

use crate::error::SchemaError;

/// The canonical habit shape, including the value constraints enforced on
/// merged items.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub difficulty: Difficulty,
    #[schemars(range(min = 1, max = 60))]
    pub time_minutes: u32,
    pub language: String,
    pub research_backed: bool,
    #[schemars(range(min = 0, max = 10))]
    pub effectiveness_score: f64,
    pub effectiveness_rank: u32,
    #[schemars(range(min = 1, max = 100))]
    pub priority: u32,
    pub is_primary_recommendation: bool,
    pub goal_tags: Vec<String>,
    pub instructions: Vec<String>,
    pub why_effective: String,
    pub research_summary: String,
    pub sources: Vec<String>,
    pub optimal_timing: String,
    pub progression_tips: Vec<String>,
    /// Research articles backing this habit.
    #[serde(default)]
    pub research_ids: Vec<String>,
}

/// The canonical research-article shape. Only `id` is mandatory; the
/// historical files vary widely.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRecord {
    pub id: String,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub published_year: Option<i64>,
    pub authors: Option<Vec<String>>,
    pub journal: Option<String>,
    pub url: Option<String>,
}

/// Central store of the content schemas.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (infallible
/// for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry containing the habit and research schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which is not expected in practice.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();
        register!(schemas, "habit", HabitRecord);
        register!(schemas, "research", ResearchRecord);
        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Validate an instance's field *values* against a named schema.
    ///
    /// Returns the violation messages, empty when the values conform.
    /// Missing-required-field errors are filtered out; absence is reported
    /// by the required-fields check with its own severity split.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unknown schema name, or
    /// `SchemaError::Compilation` when the schema cannot be compiled.
    pub fn value_errors(
        &self,
        name: &str,
        instance: &serde_json::Value,
    ) -> Result<Vec<String>, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(format!("{e}")))?;

        Ok(validator
            .iter_errors(instance)
            .filter(|e| !matches!(e.kind, ValidationErrorKind::Required { .. }))
            .map(|e| format!("{e}"))
            .collect())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
