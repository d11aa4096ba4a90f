//! Implementation of the `goinit list` command.

use serde::Serialize;
use tracing::instrument;

use goinit_core::application::{CatalogService, CoverageReport, LayoutInfo};

use crate::{
    cli::{ListArgs, global::OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct Catalog {
    layouts: Vec<LayoutInfo>,
    coverage: CoverageReport,
}

/// List layout variants, their declared files, and which templates the
/// active store can serve.
#[instrument(skip_all)]
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = CatalogService::new(super::template_store(&config)?);

    let layouts = match args.structure {
        Some(structure) => vec![CatalogService::layout(structure.into())],
        None => catalog.layouts(),
    };
    let coverage = catalog.coverage()?;

    match output.format() {
        OutputFormat::Json => output.json(&Catalog { layouts, coverage })?,
        OutputFormat::Human => {
            for layout in &layouts {
                output.header(&format!("{} ({} files)", layout.structure, layout.entries.len()))?;
                let rows: Vec<(String, String)> = layout
                    .entries
                    .iter()
                    .map(|e| {
                        let note = if e.conditional { " (conditional)" } else { "" };
                        (format!("  {}", e.output), format!("{}{note}", e.template))
                    })
                    .collect();
                output.table(&rows)?;
                output.print("")?;
            }

            if coverage.is_complete() {
                output.success(&format!(
                    "All {} templates available",
                    coverage.available.len()
                ))?;
            } else {
                output.warning(&format!(
                    "{} templates missing; their files will be skipped:",
                    coverage.missing.len()
                ))?;
                for id in &coverage.missing {
                    output.warning(&format!("  {id}"))?;
                }
            }
        }
        OutputFormat::Plain | OutputFormat::Auto => {
            for layout in &layouts {
                for entry in &layout.entries {
                    output.data(&format!(
                        "{}\t{}\t{}",
                        layout.structure, entry.output, entry.template
                    ))?;
                }
            }
        }
    }

    Ok(())
}
