//! Report payload types serialized into the report artifacts.
//!
//! Builders live in `hab-report`; the types live here so any crate can
//! consume them without depending on report generation. All maps are
//! `BTreeMap` so repeated runs over the same issue lists serialize
//! byte-identically.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::FileKind;
use crate::issues::DataInconsistency;

/// Aggregate over one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub files_processed: usize,
    pub habits_processed: usize,
    pub research_processed: usize,
    pub critical_errors: usize,
    pub data_inconsistencies: usize,
    pub content_warnings: usize,
    /// Issue counts keyed by wire-form issue type.
    pub issue_breakdown: BTreeMap<String, usize>,
    /// Top five issue types by frequency; ties break on lexical type order.
    pub top_issues: Vec<TopIssue>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopIssue {
    pub issue_type: String,
    pub count: usize,
}

/// Content-quality report with a 0-100 health score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub quality_score: f64,
    pub habits_processed: usize,
    pub research_processed: usize,
    pub critical_errors: usize,
    pub data_inconsistencies: usize,
    pub content_warnings: usize,
}

/// Data inconsistencies partitioned by issue type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InconsistencyReport {
    pub total: usize,
    pub by_type: BTreeMap<String, Vec<DataInconsistency>>,
}

/// Inventory of every discovered content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentManifest {
    pub total_files: usize,
    pub files: Vec<ManifestEntry>,
    pub category_counts: BTreeMap<String, usize>,
    pub naming_conventions: NamingConventions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub filename: String,
    pub category: String,
    pub kind: FileKind,
    pub size_bytes: u64,
    pub modified_at: DateTime<Utc>,
}

/// The filename patterns governed directories are expected to follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingConventions {
    pub habit_files: String,
    pub research_files: String,
    pub examples: Vec<String>,
}
