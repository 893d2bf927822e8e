use hab_config::HabConfig;

use crate::cli::GlobalFlags;
use crate::output;

/// Handle `hab config`: print the resolved configuration.
pub fn handle(config: &HabConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output(config, flags.format)
}
