//! Build automation tasks for the policy quiz workspace
//!
//! Currently generates the CLI reference from the clap definitions so the
//! docs cannot drift from the binary.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the policy quiz workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the ingest CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    let commands = clap_markdown::help_markdown::<policyquiz_ingest::Cli>();

    let content = format!(
        r#"# policyquiz-ingest CLI Reference

Generated from the CLI source code. Regenerate with `cargo xtask generate-cli-docs`.

## Directory layout

```text
data/raw/
    <policy manual>/
        Policy/       01_Policy_Name.docx
        Procedures/   01_Procedure_Name.pptx
        Tools/        01_Tool_Name.pdf
        Education/    01_Education_Resource.pptx
```

Manuals without any of the four resource type folders are skipped.

## Environment Variables

- `RAW_DOCUMENTS_PATH` - Raw policy manuals (default: `./data/raw`)
- `PROCESSED_DOCUMENTS_PATH` - Catalog output directory (default: `./data/processed`)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR` - Logging

Variables can also be set in a `.env` file in the working directory.

## Commands

{}
"#,
        commands
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());
    Ok(())
}
