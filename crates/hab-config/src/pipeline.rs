//! Pipeline execution knobs.

use serde::{Deserialize, Serialize};

const fn default_concurrency() -> usize {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Bound on concurrently loaded files. Results are always replayed in
    /// discovery order, so this never affects merge output.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Optional wall-clock budget for a full run. Expiry is reported as a
    /// `PIPELINE_TIMEOUT` critical error, not a process failure.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            timeout_secs: None,
        }
    }
}
