use std::path::Path;

use hab_config::HabConfig;
use hab_content::discover::discover;
use hab_report::build_manifest;

use crate::cli::GlobalFlags;
use crate::output;
use crate::pipeline::ContentPipeline;

/// Handle `hab discover`: discovery only, print the manifest.
pub fn handle(project_root: &Path, config: HabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pipeline = ContentPipeline::new(project_root, config);
    let outcome = discover(&pipeline.config().content);
    if !outcome.issues.critical_errors.is_empty() {
        tracing::warn!(
            errors = outcome.issues.critical_errors.len(),
            "discovery reported critical errors; run 'hab validate' for details"
        );
    }
    output::output(&build_manifest(&outcome.descriptors), flags.format)
}
