use std::path::Path;

use hab_config::HabConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::output;
use crate::pipeline::ContentPipeline;

/// Handle `hab run`: full pipeline, write the report artifacts, then fail the
/// process in strict mode when critical errors are present. Reports are
/// always written first so consumers get a full picture even on failure.
pub async fn handle(
    args: &RunArgs,
    project_root: &Path,
    config: HabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let pipeline = ContentPipeline::new(project_root, config);
    let run = pipeline.execute().await?;

    let reports_dir = pipeline.config().reports.dir.clone();
    let written = hab_report::write_all(&reports_dir, &run.artifacts)?;
    tracing::info!(reports = written.len(), dir = %reports_dir.display(), "run complete");

    output::output(&run.artifacts.summary, flags.format)?;

    if args.strict && run.issues.has_critical() {
        anyhow::bail!(
            "{} critical error(s) present; see {}",
            run.issues.critical_errors.len(),
            reports_dir.display()
        );
    }
    Ok(())
}
