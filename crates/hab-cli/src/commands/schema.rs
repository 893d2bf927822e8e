use anyhow::bail;
use hab_validate::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `hab schema`: print a named content schema, or list the registry.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match args.name.as_deref() {
        None => output::output(&registry.list(), flags.format),
        Some(name) => match registry.get(name) {
            Some(schema) => output::output(schema, flags.format),
            None => bail!(
                "unknown schema '{name}' (available: {})",
                registry.list().join(", ")
            ),
        },
    }
}
