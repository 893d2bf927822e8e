use std::path::Path;

use hab_config::HabConfig;

use crate::cli::GlobalFlags;
use crate::output;
use crate::pipeline::ContentPipeline;

/// Handle `hab validate`: full pipeline without writing artifacts.
pub async fn handle(project_root: &Path, config: HabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pipeline = ContentPipeline::new(project_root, config);
    let run = pipeline.execute().await?;
    output::output(&run.artifacts.summary, flags.format)
}
