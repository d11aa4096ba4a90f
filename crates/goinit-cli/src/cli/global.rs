//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;

/// Verbosity, colour, config file and output format.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// `-v` info, `-vv` debug (skipped templates, resolved pins), `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "More log output on stderr (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors and results only"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(long = "no-color", global = true, env = "NO_COLOR", help = "Disable ANSI colours")]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the usual locations.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format (auto defers to output.format, then the terminal)"
    )]
    pub format: OutputFormat,
}

impl GlobalArgs {
    /// Tracing level implied by `-v` / `-q`.  `--quiet` wins.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Headers, tables and colour.
    Human,
    /// One record per line, no decoration.
    Plain,
    Json,
}
