//! Implementation of the `goinit preview` command.

use tracing::instrument;

use crate::{
    cli::{ProjectArgs, global::OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Print the files `goinit new` would generate, relative to the project
/// root.  Needs neither a name nor a module path.
#[instrument(skip_all)]
pub fn execute(args: ProjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let configuration = super::configuration(&args, &config)?;
    let files = super::scaffold_service(&config)?.preview(&configuration);

    match output.format() {
        OutputFormat::Json => output.json(&files)?,
        OutputFormat::Human => {
            output.header(&format!(
                "{} {} project ({} files)",
                configuration.structure(),
                configuration.project_type(),
                files.len(),
            ))?;
            for file in &files {
                output.data(&format!("  {file}"))?;
            }
        }
        OutputFormat::Plain | OutputFormat::Auto => {
            for file in &files {
                output.data(file)?;
            }
        }
    }

    Ok(())
}
