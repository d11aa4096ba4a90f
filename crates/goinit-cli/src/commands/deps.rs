//! Implementation of the `goinit deps` command.

use tracing::instrument;

use crate::{
    cli::{ProjectArgs, global::OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Print the `require` entries of the generated `go.mod`, sorted by module
/// path.
#[instrument(skip_all)]
pub fn execute(args: ProjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let configuration = super::configuration(&args, &config)?;
    let deps = super::scaffold_service(&config)?.dependencies(&configuration);

    match output.format() {
        OutputFormat::Json => output.json(&deps)?,
        OutputFormat::Human => {
            if deps.is_empty() {
                output.info("No third-party modules; the project uses the standard library only")?;
                return Ok(());
            }
            output.header(&format!("{} modules", deps.len()))?;
            let rows: Vec<(String, String)> = deps
                .iter()
                .map(|(module, version)| (module.to_string(), version.to_string()))
                .collect();
            output.table(&rows)?;
        }
        OutputFormat::Plain | OutputFormat::Auto => {
            for (module, version) in deps.iter() {
                output.data(&format!("{module} {version}"))?;
            }
        }
    }

    Ok(())
}
