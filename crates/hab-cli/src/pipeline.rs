//! Content pipeline: discover → load → merge → validate → report.
//!
//! Stages run strictly in order; each consumes the full output of the
//! previous stage, because global invariants (duplicate ids across all
//! files) cannot be checked until every file is loaded. Issues accumulate
//! across stages; only an unrecoverable condition (no content sources
//! resolvable at all) aborts the run.

use std::path::{Path, PathBuf};

use hab_config::HabConfig;
use hab_content::discover::discover;
use hab_content::loader::load_all;
use hab_content::merge::{MergedContent, merge};
use hab_core::enums::IssueType;
use hab_core::{ContentFileDescriptor, CriticalError, IssueSet};
use hab_report::summary::RunCounts;
use hab_report::writer::ReportArtifacts;
use hab_validate::run_checks;

use crate::progress::Progress;

/// The pipeline over one resolved configuration.
pub struct ContentPipeline {
    config: HabConfig,
}

/// Result of one pipeline run.
pub struct PipelineRun {
    pub descriptors: Vec<ContentFileDescriptor>,
    pub merged: MergedContent,
    pub issues: IssueSet,
    pub artifacts: ReportArtifacts,
}

impl ContentPipeline {
    /// Build a pipeline with the config's relative paths resolved against
    /// `project_root`.
    #[must_use]
    pub fn new(project_root: &Path, config: HabConfig) -> Self {
        Self {
            config: resolve_paths(project_root, config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &HabConfig {
        &self.config
    }

    /// Execute the full pipeline, honoring the configured wall-clock budget.
    ///
    /// # Errors
    ///
    /// Fails only when no content source is resolvable at all; every other
    /// failure is reported through the issue lists.
    pub async fn execute(&self) -> anyhow::Result<PipelineRun> {
        match self.config.pipeline.timeout_secs {
            Some(secs) => {
                let budget = std::time::Duration::from_secs(secs);
                match tokio::time::timeout(budget, self.execute_inner()).await {
                    Ok(run) => run,
                    Err(_) => Ok(self.timed_out(secs)),
                }
            }
            None => self.execute_inner().await,
        }
    }

    async fn execute_inner(&self) -> anyhow::Result<PipelineRun> {
        anyhow::ensure!(
            self.any_source_resolvable(),
            "no content sources resolvable: none of '{}', '{}', '{}' exist and no legacy file is present",
            self.config.content.habits_dir.display(),
            self.config.content.research_dir.display(),
            self.config.content.custom_dir.display(),
        );

        let spinner = Progress::spinner("discovering content files");
        let discovery = discover(&self.config.content);
        spinner.finish_ok(&format!("{} content files discovered", discovery.descriptors.len()));

        let spinner = Progress::spinner("loading content files");
        let load = load_all(discovery.descriptors.clone(), self.config.pipeline.concurrency).await;
        spinner.finish_clear();

        let merged = merge(&load.files);

        let spinner = Progress::spinner("validating merged content");
        let checks = run_checks(&merged, &load.files, &self.config.validation);
        spinner.finish_clear();

        let mut issues = IssueSet::new();
        issues.extend(discovery.issues);
        issues.extend(load.issues);
        issues.extend(checks);

        let counts = RunCounts {
            files: load.files.len(),
            habits: merged.habit_count(),
            research: merged.research_count(),
        };
        let artifacts = hab_report::generate(&counts, &issues, &discovery.descriptors);

        Ok(PipelineRun {
            descriptors: discovery.descriptors,
            merged,
            issues,
            artifacts,
        })
    }

    /// A run that expired its wall-clock budget: no content, one critical
    /// error, reports still produced.
    fn timed_out(&self, secs: u64) -> PipelineRun {
        let mut issues = IssueSet::new();
        issues.critical_errors.push(CriticalError::new(
            IssueType::PipelineTimeout,
            format!("pipeline exceeded the {secs}s wall-clock budget"),
            None,
        ));
        let artifacts = hab_report::generate(&RunCounts::default(), &issues, &[]);
        PipelineRun {
            descriptors: Vec::new(),
            merged: MergedContent::default(),
            issues,
            artifacts,
        }
    }

    fn any_source_resolvable(&self) -> bool {
        let content = &self.config.content;
        content.habits_dir.is_dir()
            || content.research_dir.is_dir()
            || content.custom_dir.is_dir()
            || content.legacy_files.iter().any(|p| p.is_file())
    }
}

/// Resolve every configured path against the project root. Absolute paths
/// pass through unchanged.
fn resolve_paths(project_root: &Path, mut config: HabConfig) -> HabConfig {
    config.content.habits_dir = resolve(project_root, &config.content.habits_dir);
    config.content.research_dir = resolve(project_root, &config.content.research_dir);
    config.content.custom_dir = resolve(project_root, &config.content.custom_dir);
    config.content.legacy_files = config
        .content
        .legacy_files
        .iter()
        .map(|p| resolve(project_root, p))
        .collect();
    config.reports.dir = resolve(project_root, &config.reports.dir);
    config
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
