//! Implementation of the `goinit new` command.
//!
//! Responsibility: turn flags and request files into a `Configuration`, call
//! the scaffold service, and put the result where the user asked.  No
//! generation logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use goinit_core::{
    application::ScaffoldService,
    domain::{Configuration, DomainValidator},
    error::GoinitError,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Machine-readable summary for `--format json`.
#[derive(Debug, Serialize)]
struct Generated<'a> {
    project: &'a str,
    kind: &'static str,
    path: &'a Path,
    files: Vec<String>,
}

/// Execute the `goinit new` command.
///
/// 1. Resolve the configuration and require a name and module path
/// 2. `--dry-run`: print the file list and stop
/// 3. `--extract DIR`: write a directory tree (after confirmation)
/// 4. Otherwise: write `<NAME>.zip`, or `--output FILE`
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let configuration = super::configuration(&args.project, &config)?;
    DomainValidator::require_identity(&configuration).map_err(GoinitError::from)?;

    let service = super::scaffold_service(&config)?;

    if args.dry_run {
        return dry_run(&args, &service, &configuration, &output);
    }

    match &args.extract {
        Some(dir) => extract(&args, &global, &service, &configuration, dir, &output),
        None => archive(&args, &service, &configuration, &output),
    }
}

// ── modes ─────────────────────────────────────────────────────────────────────

fn dry_run(
    args: &NewArgs,
    service: &ScaffoldService,
    configuration: &Configuration,
    output: &OutputManager,
) -> CliResult<()> {
    let files = service.preview(configuration);
    let destination = destination(args, configuration);

    if output.is_json() {
        output.json(&Generated {
            project: configuration.project_name(),
            kind: kind(args),
            path: &destination,
            files,
        })?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {} '{}' at {}",
        kind(args),
        configuration.project_name(),
        destination.display(),
    ))?;
    show_configuration(configuration, output)?;
    for file in &files {
        output.data(&format!("  {}/{file}", configuration.project_name()))?;
    }
    Ok(())
}

fn archive(
    args: &NewArgs,
    service: &ScaffoldService,
    configuration: &Configuration,
    output: &OutputManager,
) -> CliResult<()> {
    let path = archive_path(args, configuration);
    if path.exists() && !args.force {
        return Err(CliError::OutputExists { path });
    }

    let spinner = output.spinner(&format!("Generating {}", configuration.project_name()));
    let generated = service.generate(configuration);
    spinner.finish_and_clear();
    let bytes = generated?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(&path, &bytes)
        .with_cli_context(|| format!("Failed to write archive to '{}'", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "Archive written");
    report(args, service, configuration, &path, output)
}

fn extract(
    args: &NewArgs,
    global: &GlobalArgs,
    service: &ScaffoldService,
    configuration: &Configuration,
    dir: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if !global.quiet && !args.yes && !output.is_json() {
        show_configuration(configuration, output)?;
        output.print(&format!("  Location:     {}", dir.display()))?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let spinner = output.spinner(&format!("Writing {}", configuration.project_name()));
    let written = service.materialize(configuration, dir);
    spinner.finish_and_clear();
    let root = written?;

    report(args, service, configuration, &root, output)?;

    if !output.is_json() && !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", root.display()))?;
        output.print("  go mod tidy")?;
        output.print("  go run ./...")?;
    }
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn report(
    args: &NewArgs,
    service: &ScaffoldService,
    configuration: &Configuration,
    path: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let files = service.preview(configuration);

    if output.is_json() {
        output.json(&Generated {
            project: configuration.project_name(),
            kind: kind(args),
            path,
            files,
        })?;
    } else {
        output.success(&format!(
            "Created {} '{}' ({} files) at {}",
            kind(args),
            configuration.project_name(),
            files.len(),
            path.display(),
        ))?;
    }
    Ok(())
}

fn kind(args: &NewArgs) -> &'static str {
    if args.extract.is_some() {
        "directory"
    } else {
        "archive"
    }
}

fn destination(args: &NewArgs, configuration: &Configuration) -> PathBuf {
    match &args.extract {
        Some(dir) => dir.join(configuration.project_name()),
        None => archive_path(args, configuration),
    }
}

/// `--output`, or `<NAME>.zip` in the current directory.
fn archive_path(args: &NewArgs, configuration: &Configuration) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.zip", configuration.project_name())))
}

fn show_configuration(configuration: &Configuration, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:      {}", configuration.project_name()))?;
    out.print(&format!("  Module:       {}", configuration.module()))?;
    out.print(&format!("  Go:           {}", configuration.go_version()))?;
    out.print(&format!("  Structure:    {}", configuration.structure()))?;
    out.print(&format!("  Type:         {}", configuration.project_type()))?;
    out.print(&format!("  Router:       {}", configuration.router()))?;
    out.print(&format!("  Logger:       {}", configuration.logger()))?;

    let features: Vec<_> = configuration
        .enabled_features()
        .iter()
        .map(|f| f.as_str())
        .collect();
    if !features.is_empty() {
        out.print(&format!("  Features:     {}", features.join(", ")))?;
    }
    Ok(())
}

/// Ask before writing into the filesystem.  Non-interactive sessions and
/// builds without the `interactive` feature proceed.
#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        debug!("stdin is not a terminal, skipping confirmation");
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    debug!("built without interactive support, skipping confirmation");
    Ok(true)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
