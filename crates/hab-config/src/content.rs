//! Content source locations: directory roots keyed by kind, legacy files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_habits_dir() -> PathBuf {
    PathBuf::from("content/habits")
}

fn default_research_dir() -> PathBuf {
    PathBuf::from("content/research-articles")
}

fn default_custom_dir() -> PathBuf {
    PathBuf::from("content/custom")
}

fn default_index_file() -> String {
    String::from("index.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Root holding goal- and topic-scoped habit files.
    #[serde(default = "default_habits_dir")]
    pub habits_dir: PathBuf,

    /// Root holding research article files.
    #[serde(default = "default_research_dir")]
    pub research_dir: PathBuf,

    /// Root holding mixed custom content files.
    #[serde(default = "default_custom_dir")]
    pub custom_dir: PathBuf,

    /// Legacy single-file locations, always tagged category `legacy` and
    /// exempt from naming-convention checks. Processed after the roots, in
    /// this order.
    #[serde(default)]
    pub legacy_files: Vec<PathBuf>,

    /// Index file name skipped during discovery.
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            habits_dir: default_habits_dir(),
            research_dir: default_research_dir(),
            custom_dir: default_custom_dir(),
            legacy_files: Vec::new(),
            index_file: default_index_file(),
        }
    }
}
