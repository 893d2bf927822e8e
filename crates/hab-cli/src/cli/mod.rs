use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hab` binary.
#[derive(Debug, Parser)]
#[command(name = "hab", version, about = "Habitat - content pipeline for habit and research content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["hab", "--format", "table", "--verbose", "validate"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["hab", "validate", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["hab", "--format", "xml", "validate"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn run_accepts_strict_flag() {
        let cli = Cli::try_parse_from(["hab", "run", "--strict"]).expect("cli should parse");
        match cli.command {
            Commands::Run(args) => assert!(args.strict),
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn schema_name_is_optional() {
        let cli = Cli::try_parse_from(["hab", "schema"]).expect("cli should parse");
        match cli.command {
            Commands::Schema(args) => assert!(args.name.is_none()),
            other => panic!("expected schema command, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["hab", "schema", "habit"]).expect("cli should parse");
        match cli.command {
            Commands::Schema(args) => assert_eq!(args.name.as_deref(), Some("habit")),
            other => panic!("expected schema command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["hab", "--project", "/tmp/demo", "validate"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
