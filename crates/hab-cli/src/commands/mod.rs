use std::path::Path;

use hab_config::HabConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;

pub mod config;
pub mod discover;
pub mod run;
pub mod schema;
pub mod validate;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    project_root: &Path,
    config: HabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => run::handle(&args, project_root, config, flags).await,
        Commands::Validate => validate::handle(project_root, config, flags).await,
        Commands::Discover => discover::handle(project_root, config, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
        Commands::Config => config::handle(&config, flags),
    }
}
