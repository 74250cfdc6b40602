//! Terminal rendering for reports, summaries and catalog listings

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::pipeline::IngestReport;
use crate::progress::format_bytes;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use policyquiz_common::Result;
use std::fmt::Display;

/// Human readable report of a `process` run
pub fn format_report(report: &IngestReport) -> String {
    let mut out = format!("Processed {} documents\n", report.documents);

    if report.documents == 0 {
        out.push_str("No documents were processed.\n");
    } else {
        out.push('\n');
        out.push_str(&format_summary(&report.catalog));
    }

    match &report.metadata_path {
        Some(path) => out.push_str(&format!(
            "\n{} Saved metadata for {} documents to {}\n",
            "✓".green(),
            report.documents,
            path.display()
        )),
        None => out.push_str("No metadata to save\n"),
    }

    out
}

/// Counts by manual and by resource type
pub fn format_summary(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "Catalog is empty.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Summary by policy manual:".cyan().bold()));
    out.push_str(&format!(
        "{}\n",
        counts_table("policy_manual", &catalog.counts_by_manual())
    ));
    out.push_str(&format!("{}\n", "Summary by resource type:".cyan().bold()));
    out.push_str(&format!(
        "{}\n",
        counts_table("resource_type", &catalog.counts_by_resource_type())
    ));
    out.push_str(&format!("Total documents: {}\n", catalog.len()));
    out
}

/// Render catalog records in the requested format
pub fn render_catalog(catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!("{}\n", catalog_table(catalog))),
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            catalog.write_to(&mut buffer)?;
            Ok(String::from_utf8_lossy(&buffer).into_owned())
        },
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(catalog.documents())?
        )),
    }
}

fn counts_table<K: Display>(label: &str, counts: &[(K, usize)]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![label, "count"]);

    for (key, count) in counts {
        table.add_row(vec![key.to_string(), count.to_string()]);
    }

    table
}

fn catalog_table(catalog: &Catalog) -> Table {
    let with_checksums = catalog.has_checksums();
    let mut header = vec!["policy_manual", "resource_type", "index", "name", "extension"];
    if with_checksums {
        header.extend(["size", "sha256"]);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header);

    for doc in catalog {
        let mut row = vec![
            doc.policy_manual.clone(),
            doc.resource_type.to_string(),
            doc.index.clone(),
            doc.name.clone(),
            doc.extension.clone(),
        ];
        if with_checksums {
            row.push(doc.size_bytes.map(format_bytes).unwrap_or_default());
            row.push(
                doc.sha256
                    .as_deref()
                    .map(|s| s.chars().take(16).collect())
                    .unwrap_or_default(),
            );
        }
        table.add_row(row);
    }

    table
}
