use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write the report artifacts.
    Run(RunArgs),
    /// Discovery only: print the content manifest.
    Discover,
    /// Run the pipeline without writing artifacts; print the summary.
    Validate,
    /// Print a content JSON Schema, or list the available schemas.
    Schema(SchemaArgs),
    /// Print the resolved configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Exit non-zero when critical errors are present (reports are still
    /// written first).
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (`habit`, `research`). Lists available schemas when
    /// omitted.
    pub name: Option<String>,
}
