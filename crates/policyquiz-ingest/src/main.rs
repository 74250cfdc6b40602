//! Policy Quiz Ingest - Main entry point

use clap::Parser;
use policyquiz_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use policyquiz_ingest::{commands, Cli, Commands};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // .env must be loaded before anything reads configuration
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let Some(command) = cli.command else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    let base = LogConfig::builder()
        .level(LogLevel::Info)
        .output(LogOutput::Console)
        .log_file_prefix("policyquiz-ingest")
        .build();

    // Environment variables override the defaults; a bad value falls back to them
    let mut log_config = LogConfig::from_env_or(base.clone()).unwrap_or_else(|e| {
        eprintln!("Warning: invalid logging configuration: {:#}", e);
        base
    });

    // --verbose wins over LOG_LEVEL
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    if let Err(e) = init_logging(&log_config) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    if let Err(e) = execute_command(command).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn execute_command(command: Commands) -> policyquiz_common::Result<()> {
    match command {
        Commands::Process {
            raw_dir,
            processed_dir,
            checksums,
        } => commands::process::run(raw_dir, processed_dir, checksums)
            .await
            .map(|_| ()),

        Commands::Summary { metadata } => commands::summary::run(metadata).await,

        Commands::List {
            metadata,
            manual,
            resource_type,
            format,
        } => commands::list::run(metadata, manual.as_deref(), resource_type, format).await,
    }
}
