//! Validator thresholds and vocabularies.

use serde::{Deserialize, Serialize};

fn default_valid_goal_tags() -> Vec<String> {
    vec![
        String::from("feel_better"),
        String::from("get_moving"),
        String::from("better_sleep"),
    ]
}

const fn default_min_instruction_steps() -> usize {
    3
}

const fn default_min_instruction_len() -> usize {
    10
}

const fn default_min_summary_len() -> usize {
    50
}

const fn default_stale_before_year() -> i64 {
    2015
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// The goal-tag vocabulary habits may draw from.
    #[serde(default = "default_valid_goal_tags")]
    pub valid_goal_tags: Vec<String>,

    /// Habits with fewer instruction steps get a quality warning.
    #[serde(default = "default_min_instruction_steps")]
    pub min_instruction_steps: usize,

    /// Instruction steps shorter than this (characters) get a quality warning.
    #[serde(default = "default_min_instruction_len")]
    pub min_instruction_len: usize,

    /// Research summaries shorter than this (characters) get a quality warning.
    #[serde(default = "default_min_summary_len")]
    pub min_summary_len: usize,

    /// Research published before this year is flagged as stale.
    #[serde(default = "default_stale_before_year")]
    pub stale_before_year: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            valid_goal_tags: default_valid_goal_tags(),
            min_instruction_steps: default_min_instruction_steps(),
            min_instruction_len: default_min_instruction_len(),
            min_summary_len: default_min_summary_len(),
            stale_before_year: default_stale_before_year(),
        }
    }
}
