//! Command-line definition for `policyquiz-ingest`

use clap::{Parser, Subcommand, ValueEnum};
use policyquiz_common::ResourceType;
use std::path::PathBuf;

/// Catalog policy manuals for the policy quiz bot
#[derive(Parser, Debug)]
#[command(name = "policyquiz-ingest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the command reference as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the raw documents directory and write the metadata catalog
    Process {
        /// Directory containing one folder per policy manual [env: RAW_DOCUMENTS_PATH]
        #[arg(long)]
        raw_dir: Option<PathBuf>,

        /// Directory the catalog is written to [env: PROCESSED_DOCUMENTS_PATH]
        #[arg(long)]
        processed_dir: Option<PathBuf>,

        /// Record file size and SHA-256 for every document
        #[arg(long)]
        checksums: bool,
    },

    /// Show document counts from an existing catalog
    Summary {
        /// Catalog file (defaults to document_metadata.csv in the processed directory)
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },

    /// List catalogued documents
    List {
        /// Catalog file (defaults to document_metadata.csv in the processed directory)
        #[arg(short, long)]
        metadata: Option<PathBuf>,

        /// Only documents from this policy manual
        #[arg(long)]
        manual: Option<String>,

        /// Only documents of this resource type (Policy, Procedures, Tools, Education)
        #[arg(short, long)]
        resource_type: Option<ResourceType>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// How `list` renders records
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "policyquiz-ingest",
            "list",
            "--manual",
            "Falls",
            "--resource-type",
            "Tools",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List {
                manual,
                resource_type,
                format,
                ..
            }) => {
                assert_eq!(manual.as_deref(), Some("Falls"));
                assert_eq!(resource_type, Some(ResourceType::Tools));
                assert_eq!(format, OutputFormat::Json);
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_resource_type_is_rejected() {
        let result =
            Cli::try_parse_from(["policyquiz-ingest", "list", "--resource-type", "policy"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["policyquiz-ingest", "process", "-v", "--checksums"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Process { checksums: true, .. })));
    }
}
